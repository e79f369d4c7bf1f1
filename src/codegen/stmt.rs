use crate::{
    ast::{ast::Stmt, statements::BlockStmt},
    errors::errors::Error,
};

use super::{expr::gen_expression, generator::Generator};

/// Renders one statement. The first line carries no indentation; lines of
/// nested blocks are indented relative to `depth`.
pub fn gen_statement(generator: &Generator, stmt: &Stmt, depth: usize) -> Result<String, Error> {
    match stmt {
        Stmt::VarDecl(decl) => match &decl.assigned_value {
            Some(value) => Ok(format!(
                "{} {} = {};",
                decl.kind,
                decl.identifier,
                gen_expression(value)?
            )),
            None => Ok(format!("{} {};", decl.kind, decl.identifier)),
        },
        Stmt::Return(stmt) => match &stmt.value {
            Some(value) => Ok(format!("return {};", gen_expression(value)?)),
            None => Ok(String::from("return;")),
        },
        Stmt::Expression(stmt) => Ok(format!("{};", gen_expression(&stmt.expression)?)),
        Stmt::Block(block) => gen_block(generator, block, depth),
    }
}

fn gen_block(generator: &Generator, block: &BlockStmt, depth: usize) -> Result<String, Error> {
    let mut output = String::from("{\n");

    for stmt in block.iter() {
        output.push_str(&generator.indent(depth + 1));
        output.push_str(&gen_statement(generator, stmt, depth + 1)?);
        output.push('\n');
    }

    output.push_str(&generator.indent(depth));
    output.push('}');

    Ok(output)
}
