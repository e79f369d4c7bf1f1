use log::{debug, trace};

use crate::{
    ast::{
        ast::{Expr, Program, Stmt},
        expressions::FunctionExpr,
        statements::{BlockStmt, TypeAnnotation, VarDeclStmt},
    },
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{environment::Environment, types::Type};

/// State for one forward checking pass.
///
/// Diagnostics are collected rather than raised; the pass always visits
/// every statement and the caller decides which diagnostics are fatal.
#[derive(Debug, Default)]
pub struct TypeChecker {
    environment: Environment,
    diagnostics: Vec<Error>,
}

impl TypeChecker {
    pub fn new() -> Self {
        TypeChecker {
            environment: Environment::new(),
            diagnostics: vec![],
        }
    }

    /// Checks every top-level statement in order and returns all diagnostics.
    pub fn check(&mut self, program: &Program) -> Vec<Error> {
        for stmt in program.iter() {
            type_check_stmt(self, stmt);
        }

        self.diagnostics.clone()
    }

    /// Resolves `name` from the innermost live scope outwards.
    pub fn lookup(&self, name: &str) -> Option<Type> {
        self.environment.get_variable(name)
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Binds `name` in the current scope. A name already declared in the same
    /// scope is replaced; that is not a diagnostic.
    fn bind(&mut self, name: &str, variable_type: Type, position: Position) {
        if let Some(previous) = self.environment.declare_variable(name, variable_type) {
            debug!("{} rebinds {} ({} -> {})", position, name, previous, variable_type);
        }
    }

    fn report(&mut self, error: Error) {
        trace!("diagnostic at {}: {}", error.get_position(), error);
        self.diagnostics.push(error);
    }
}

/// Runs a fresh checker over `program`.
pub fn type_check(program: &Program) -> (TypeChecker, Vec<Error>) {
    let mut type_checker = TypeChecker::new();
    let diagnostics = type_checker.check(program);

    (type_checker, diagnostics)
}

pub fn type_check_stmt(type_checker: &mut TypeChecker, ast: &Stmt) -> Type {
    match ast {
        Stmt::VarDecl(decl) => type_check_var_decl(type_checker, decl),
        Stmt::Return(stmt) => match &stmt.value {
            Some(value) => type_check_expr(type_checker, value),
            None => Type::Void,
        },
        Stmt::Expression(stmt) => {
            // A function declaration binds its name in the enclosing scope
            if let Expr::Function(FunctionExpr {
                name: Some(name),
                position,
                ..
            }) = &stmt.expression
            {
                type_checker.bind(name, Type::Function, *position);
            }
            type_check_expr(type_checker, &stmt.expression)
        }
        Stmt::Block(block) => type_check_block(type_checker, block),
    }
}

/// Checks `block` in a fresh scope; yields the type of its last statement.
pub fn type_check_block(type_checker: &mut TypeChecker, block: &BlockStmt) -> Type {
    type_checker.environment.push_scope();

    let mut last_type = Type::Void;
    for stmt in block.iter() {
        last_type = type_check_stmt(type_checker, stmt);
    }

    type_checker.environment.pop_scope();
    last_type
}

fn type_check_var_decl(type_checker: &mut TypeChecker, decl: &VarDeclStmt) -> Type {
    // The initializer is checked before the name is bound
    let inferred = decl
        .assigned_value
        .as_ref()
        .map(|value| type_check_expr(type_checker, value));

    let annotated = decl
        .explicit_type
        .as_ref()
        .and_then(|annotation| resolve_annotation(type_checker, annotation));

    let variable_type = match (annotated, inferred) {
        (Some(annotated), Some(inferred)) => {
            if annotated != inferred && !annotated.is_dynamic() && !inferred.is_dynamic() {
                let position = decl
                    .explicit_type
                    .as_ref()
                    .map(|annotation| annotation.position)
                    .unwrap_or(decl.position);
                type_checker.report(Error::new(
                    ErrorImpl::TypeMatchError {
                        expected: annotated.to_string(),
                        received: inferred.to_string(),
                    },
                    position,
                ));
            }
            annotated
        }
        (None, Some(inferred)) => inferred,
        (Some(annotated), None) => annotated,
        (None, None) => Type::Any,
    };

    type_checker.bind(&decl.identifier, variable_type, decl.position);

    variable_type
}

fn resolve_annotation(type_checker: &mut TypeChecker, annotation: &TypeAnnotation) -> Option<Type> {
    let resolved = Type::from_annotation(&annotation.name);

    if resolved.is_none() {
        type_checker.report(Error::new(
            ErrorImpl::UnknownType {
                type_: annotation.name.clone(),
            },
            annotation.position,
        ));
    }

    resolved
}

pub fn type_check_expr(type_checker: &mut TypeChecker, ast: &Expr) -> Type {
    match ast {
        Expr::Number(_) => Type::Number,
        Expr::String(_) => Type::String,
        Expr::Symbol(symbol) => match type_checker.lookup(&symbol.value) {
            Some(variable_type) => variable_type,
            None => {
                type_checker.report(Error::new(
                    ErrorImpl::UndefinedVariable {
                        variable: symbol.value.clone(),
                    },
                    symbol.position,
                ));
                Type::Unknown
            }
        },
        // Bodies are not checked
        Expr::Function(_) => Type::Function,
        Expr::ConsoleLog(log) => {
            for argument in log.arguments.iter() {
                type_check_expr(type_checker, argument);
            }
            Type::Void
        }
        Expr::Prefix(_) | Expr::Binary(_) | Expr::Call(_) | Expr::Member(_) => {
            type_checker.report(Error::new(
                ErrorImpl::UnknownExpression {
                    kind: ast.get_expr_type().to_string(),
                },
                *ast.get_position(),
            ));
            Type::Unknown
        }
    }
}
