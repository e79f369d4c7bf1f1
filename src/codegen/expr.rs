use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
};

pub fn gen_expression(expr: &Expr) -> Result<String, Error> {
    match expr {
        Expr::Number(number) => Ok(number.literal.clone()),
        Expr::String(string) => Ok(quote_string(&string.value)),
        Expr::Symbol(symbol) => Ok(symbol.value.clone()),
        Expr::ConsoleLog(log) => {
            let arguments = log
                .arguments
                .iter()
                .map(gen_expression)
                .collect::<Result<Vec<String>, Error>>()?;

            Ok(format!("console.log({})", arguments.join(", ")))
        }
        Expr::Function(_) | Expr::Prefix(_) | Expr::Binary(_) | Expr::Call(_) | Expr::Member(_) => {
            Err(Error::new(
                ErrorImpl::UnsupportedSyntax {
                    kind: expr.get_expr_type().to_string(),
                },
                *expr.get_position(),
            ))
        }
    }
}

/// Wraps `value` in double quotes.
///
/// Backslash sequences written in the source pass through untouched. A bare
/// `"` is escaped, raw line breaks become `\n`/`\r`, and a trailing lone
/// backslash is doubled so it cannot swallow the closing quote.
pub fn quote_string(value: &str) -> String {
    let mut output = String::with_capacity(value.len() + 2);
    output.push('"');

    let mut escaped = false;
    for ch in value.chars() {
        match ch {
            '"' if !escaped => output.push_str("\\\""),
            '\n' if !escaped => output.push_str("\\n"),
            '\r' if !escaped => output.push_str("\\r"),
            _ => output.push(ch),
        }

        escaped = ch == '\\' && !escaped;
    }

    if escaped {
        output.push('\\');
    }

    output.push('"');
    output
}
