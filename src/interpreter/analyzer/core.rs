use std::collections::HashMap;

use crate::{
    ast::{Block, DataType, Expr, FunctionDecl, Program, Statement},
    config::Config,
    error::SemanticError,
    interpreter::analyzer::scope::ScopeStack,
};

pub type SemanticResult<T> = Result<T, SemanticError>;

/// Declared shape of a user function, recorded when its declaration is seen.
#[derive(Debug, Clone)]
pub struct FunctionSignature {
    /// Declared return type.
    pub return_type: DataType,
    /// Declared parameter types, in order.
    pub params:      Vec<DataType>,
}

/// Static checker run between parsing and evaluation.
///
/// Walks the program once, in source order, and stops at the first violation.
/// Functions are registered before their bodies are checked, so recursion is
/// accepted; calls to functions declared later in the source are not.
#[derive(Debug)]
pub struct SemanticAnalyzer {
    pub(in crate::interpreter::analyzer) scopes:    ScopeStack,
    pub(in crate::interpreter::analyzer) functions: HashMap<String, FunctionSignature>,
    current_function:                               Option<DataType>,
    loop_depth:                                     usize,
    config:                                         Config,
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl SemanticAnalyzer {
    /// Creates an analyzer with an empty global scope.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { scopes: ScopeStack::new(),
               functions: HashMap::new(),
               current_function: None,
               loop_depth: 0,
               config }
    }

    /// Checks a whole program.
    ///
    /// # Errors
    /// Returns the first `SemanticError` found, in source order.
    ///
    /// # Example
    /// ```
    /// use cinder::{
    ///     config::Config, error::SemanticError, interpreter::analyzer::core::SemanticAnalyzer,
    /// };
    ///
    /// let program = cinder::parse("int x = 1;\nint x = 2;").unwrap();
    /// let err = SemanticAnalyzer::new(Config::default()).analyze(&program)
    ///                                                   .unwrap_err();
    ///
    /// assert_eq!(err,
    ///            SemanticError::DuplicateDeclaration { name: "x".to_string(),
    ///                                                  line: 2 });
    /// ```
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
    pub fn analyze(&mut self, program: &Program) -> SemanticResult<()> {
        for statement in &program.statements {
            self.analyze_statement(statement)?;
        }
        tracing::debug!(functions = self.functions.len(), "semantic analysis passed");
        Ok(())
    }

    fn analyze_statement(&mut self, statement: &Statement) -> SemanticResult<()> {
        match statement {
            Statement::VariableDeclaration { data_type,
                                             name,
                                             value,
                                             line, } => {
                let found = self.analyze_expr(value)?;
                if self.scopes.declared_locally(name) {
                    return Err(SemanticError::DuplicateDeclaration { name: name.clone(),
                                                                     line: *line });
                }
                self.check_assignable(*data_type, found, *line)?;
                self.scopes.declare(name, *data_type);
                Ok(())
            },
            Statement::Assignment { name, value, line } => {
                let Some(target) = self.scopes.resolve(name) else {
                    return Err(SemanticError::UndeclaredVariable { name: name.clone(),
                                                                   line: *line });
                };
                let found = self.analyze_expr(value)?;
                self.check_assignable(target, found, *line)
            },
            Statement::Print { expr, .. } | Statement::Expression { expr, .. } => {
                self.analyze_expr(expr)?;
                Ok(())
            },
            Statement::If { condition,
                            then_block,
                            else_block,
                            .. } => {
                self.analyze_expr(condition)?;
                self.analyze_block(then_block)?;
                if let Some(else_block) = else_block {
                    self.analyze_block(else_block)?;
                }
                Ok(())
            },
            Statement::While { condition, body, .. } => {
                self.analyze_expr(condition)?;
                self.loop_depth += 1;
                let result = self.analyze_block(body);
                self.loop_depth -= 1;
                result
            },
            Statement::Break { line } => self.check_in_loop("break", *line),
            Statement::Continue { line } => self.check_in_loop("continue", *line),
            Statement::Return { value, line } => self.analyze_return(value.as_ref(), *line),
            Statement::Function(decl) => self.analyze_function(decl),
            Statement::Block(block) => self.analyze_block(block),
        }
    }

    fn analyze_block(&mut self, block: &Block) -> SemanticResult<()> {
        self.scopes.push();
        let result = block.statements
                          .iter()
                          .try_for_each(|statement| self.analyze_statement(statement));
        self.scopes.pop();
        result
    }

    fn analyze_function(&mut self, decl: &FunctionDecl) -> SemanticResult<()> {
        if self.functions.contains_key(&decl.name) {
            return Err(SemanticError::DuplicateFunction { name: decl.name.clone(),
                                                          line: decl.line });
        }
        let signature = FunctionSignature { return_type: decl.return_type,
                                            params:      decl.params
                                                             .iter()
                                                             .map(|param| param.data_type)
                                                             .collect(), };
        self.functions.insert(decl.name.clone(), signature);
        tracing::trace!(name = %decl.name, params = decl.params.len(), "registered function");

        let hidden = self.scopes.enter_function();
        let enclosing_function = self.current_function.replace(decl.return_type);
        let enclosing_loops = std::mem::take(&mut self.loop_depth);

        let result = self.analyze_function_body(decl);

        self.current_function = enclosing_function;
        self.loop_depth = enclosing_loops;
        self.scopes.leave_function(hidden);
        result
    }

    fn analyze_function_body(&mut self, decl: &FunctionDecl) -> SemanticResult<()> {
        for param in &decl.params {
            if self.scopes.declared_locally(&param.name) {
                return Err(SemanticError::DuplicateParameter { name: param.name.clone(),
                                                               line: decl.line });
            }
            self.scopes.declare(&param.name, param.data_type);
        }
        self.analyze_block(&decl.body)
    }

    fn analyze_return(&mut self, value: Option<&Expr>, line: usize) -> SemanticResult<()> {
        let Some(return_type) = self.current_function else {
            return Err(SemanticError::ReturnOutsideFunction { line });
        };
        let Some(value) = value else {
            return Ok(());
        };
        let found = self.analyze_expr(value)?;
        if return_type == DataType::Void {
            return match found {
                Some(found) => Err(SemanticError::TypeMismatch { expected: DataType::Void,
                                                                 found,
                                                                 line }),
                None => Ok(()),
            };
        }
        self.check_assignable(return_type, found, line)
    }

    const fn check_in_loop(&self, keyword: &'static str, line: usize) -> SemanticResult<()> {
        if self.loop_depth == 0 {
            return Err(SemanticError::LoopControlOutsideLoop { keyword, line });
        }
        Ok(())
    }

    /// Unknown static types are accepted; the evaluator checks them instead.
    fn check_assignable(&self,
                        expected: DataType,
                        found: Option<DataType>,
                        line: usize)
                        -> SemanticResult<()> {
        match found {
            Some(found) if !self.config.coercion.accepts(expected, found) => {
                Err(SemanticError::TypeMismatch { expected, found, line })
            },
            _ => Ok(()),
        }
    }
}
