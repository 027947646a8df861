use oxc_ast::ast::Statement;

/// Syntactic category of a single statement.
///
/// Only `VariableDeclaration` matters to the rule; the rest exist so that
/// positions in a statement list can be tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementTag {
    VariableDeclaration,
    Block,
    Break,
    Continue,
    Debugger,
    DoWhile,
    Empty,
    Expression,
    ForIn,
    ForOf,
    For,
    If,
    Labeled,
    Return,
    Switch,
    Throw,
    Try,
    While,
    With,
    FunctionDeclaration,
    ClassDeclaration,
    ModuleDeclaration,
    TypeScriptDeclaration,
}

impl StatementTag {
    pub fn of(stmt: &Statement<'_>) -> Self {
        match stmt {
            Statement::VariableDeclaration(_) => Self::VariableDeclaration,
            Statement::BlockStatement(_) => Self::Block,
            Statement::BreakStatement(_) => Self::Break,
            Statement::ContinueStatement(_) => Self::Continue,
            Statement::DebuggerStatement(_) => Self::Debugger,
            Statement::DoWhileStatement(_) => Self::DoWhile,
            Statement::EmptyStatement(_) => Self::Empty,
            Statement::ExpressionStatement(_) => Self::Expression,
            Statement::ForInStatement(_) => Self::ForIn,
            Statement::ForOfStatement(_) => Self::ForOf,
            Statement::ForStatement(_) => Self::For,
            Statement::IfStatement(_) => Self::If,
            Statement::LabeledStatement(_) => Self::Labeled,
            Statement::ReturnStatement(_) => Self::Return,
            Statement::SwitchStatement(_) => Self::Switch,
            Statement::ThrowStatement(_) => Self::Throw,
            Statement::TryStatement(_) => Self::Try,
            Statement::WhileStatement(_) => Self::While,
            Statement::WithStatement(_) => Self::With,
            Statement::FunctionDeclaration(_) => Self::FunctionDeclaration,
            Statement::ClassDeclaration(_) => Self::ClassDeclaration,
            _ if stmt.is_module_declaration() => Self::ModuleDeclaration,
            _ => Self::TypeScriptDeclaration,
        }
    }

    pub fn is_declaration(self) -> bool {
        self == Self::VariableDeclaration
    }

    /// ESTree node type name. The two catch-all tags have no single ESTree
    /// counterpart and use a group name instead.
    pub fn name(self) -> &'static str {
        match self {
            Self::VariableDeclaration => "VariableDeclaration",
            Self::Block => "BlockStatement",
            Self::Break => "BreakStatement",
            Self::Continue => "ContinueStatement",
            Self::Debugger => "DebuggerStatement",
            Self::DoWhile => "DoWhileStatement",
            Self::Empty => "EmptyStatement",
            Self::Expression => "ExpressionStatement",
            Self::ForIn => "ForInStatement",
            Self::ForOf => "ForOfStatement",
            Self::For => "ForStatement",
            Self::If => "IfStatement",
            Self::Labeled => "LabeledStatement",
            Self::Return => "ReturnStatement",
            Self::Switch => "SwitchStatement",
            Self::Throw => "ThrowStatement",
            Self::Try => "TryStatement",
            Self::While => "WhileStatement",
            Self::With => "WithStatement",
            Self::FunctionDeclaration => "FunctionDeclaration",
            Self::ClassDeclaration => "ClassDeclaration",
            Self::ModuleDeclaration => "ModuleDeclaration",
            Self::TypeScriptDeclaration => "TSDeclaration",
        }
    }
}

pub fn classify(statements: &[Statement<'_>]) -> Vec<StatementTag> {
    statements.iter().map(StatementTag::of).collect()
}

/// True when any statement in the list declares variables.
pub fn has_declaration(tags: &[StatementTag]) -> bool {
    tags.iter().any(|tag| tag.is_declaration())
}

/// True when every declaration sits in an uninterrupted run at the front of
/// the list.
///
/// With `last` the index of the final declaration and `count` the number of
/// declarations, this holds iff `count > last`. Lists without declarations
/// hold trivially (`0 > -1`).
pub fn declarations_on_top(tags: &[StatementTag]) -> bool {
    let last = tags
        .iter()
        .rposition(|tag| tag.is_declaration())
        .map_or(-1, |i| i as isize);
    let count = tags.iter().filter(|tag| tag.is_declaration()).count() as isize;
    count > last
}
