//! Lowering of the AST to assembly text.
//!
//! Expressions are evaluated with a stack discipline: every integer literal
//! is materialized in `rax` and pushed, every binary operator pops its right
//! operand into `rdi` and its left into `rax`, applies the operation and
//! pushes the result. `return` pops the final value into `rdi` and invokes
//! the target's exit syscall.

use sage_frontend::ast::{BinOp, Expr, ExprKind, FuncDecl, Program, Stmt};
use sage_session::platform::Platform;
use sage_session::span::Span;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    #[error("cannot compile function `{0}`: only `main` is supported")]
    UnsupportedFunction(String),
}

pub fn generate(program: &Program, platform: &Platform) -> Result<String, CodegenError> {
    Codegen::new(platform).run(program)
}

struct Codegen<'a> {
    platform: &'a Platform,
    asm: String,
}

impl<'a> Codegen<'a> {
    fn new(platform: &'a Platform) -> Self {
        Self {
            platform,
            asm: String::new(),
        }
    }

    fn run(mut self, program: &Program) -> Result<String, CodegenError> {
        self.asm.push_str("global _start\n\n");
        self.asm.push_str("section .data\n\n");
        self.asm.push_str("section .text\n");

        for func in &program.functions {
            self.gen_function(func)?;
        }

        Ok(self.asm)
    }

    fn gen_function(&mut self, func: &FuncDecl) -> Result<(), CodegenError> {
        if func.name != "main" {
            return Err(CodegenError::UnsupportedFunction(func.name.clone()));
        }

        self.asm.push_str("_start:\n");

        if func.body.is_empty() {
            // an empty `main` still has to terminate the process
            let zero = Expr::new(ExprKind::Integer(0), Span::empty(0));
            self.gen_return(&zero);
            return Ok(());
        }

        for stmt in &func.body {
            self.gen_statement(stmt);
        }

        Ok(())
    }

    fn gen_statement(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Return(value) => self.gen_return(value),

            // Assignments parse but aren't lowered yet; they emit nothing.
            // TODO: give locals stack slots and lower assignments.
            Stmt::Assign { .. } => {}
        }
    }

    fn gen_return(&mut self, value: &Expr) {
        self.gen_expr(value);

        self.asm
            .push_str(&format!("\tmov rax, {}\n", self.platform.exit_syscall));
        self.asm.push_str("\tpop rdi\n");
        self.asm.push_str("\tsyscall\n");
    }

    fn gen_expr(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Integer(value) => {
                self.asm.push_str(&format!("\tmov rax, {value}\n"));
                self.asm.push_str("\tpush rax\n");
            }

            ExprKind::BinOp { op, lhs, rhs } => {
                self.gen_expr(lhs);
                self.gen_expr(rhs);

                // right operand first, so that rax holds the left-hand side
                self.asm.push_str("\tpop rdi\n");
                self.asm.push_str("\tpop rax\n");

                match op {
                    BinOp::Add => self.asm.push_str("\tadd rax, rdi\n"),
                    BinOp::Sub => self.asm.push_str("\tsub rax, rdi\n"),
                    BinOp::Mul => self.asm.push_str("\timul rax, rdi\n"),
                    BinOp::Div => {
                        // idiv divides rdx:rax; cqo sign-extends rax into rdx
                        // so negative and large dividends divide correctly
                        self.asm.push_str("\tcqo\n");
                        self.asm.push_str("\tidiv rdi\n");
                    }
                }

                self.asm.push_str("\tpush rax\n");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{generate, CodegenError};
    use sage_session::platform::Platform;
    use target_lexicon::Triple;

    fn platform() -> Platform {
        let triple: Triple = "x86_64-unknown-linux-gnu".parse().unwrap();
        Platform::for_target(triple).unwrap()
    }

    fn compile(source: &str) -> Result<String, CodegenError> {
        let program = sage_frontend::parse(sage_frontend::tokenize(source)).unwrap();
        generate(&program, &platform())
    }

    const PREAMBLE: &str = "global _start\n\nsection .data\n\nsection .text\n";

    #[test]
    fn return_42() {
        let expected = format!(
            "{PREAMBLE}_start:\n\
             \tmov rax, 42\n\
             \tpush rax\n\
             \tmov rax, 60\n\
             \tpop rdi\n\
             \tsyscall\n"
        );

        assert_eq!(compile("fn main(): i64 { return 42; }").unwrap(), expected);
    }

    #[test]
    fn bare_return_and_empty_body_are_equivalent() {
        let expected = format!(
            "{PREAMBLE}_start:\n\
             \tmov rax, 0\n\
             \tpush rax\n\
             \tmov rax, 60\n\
             \tpop rdi\n\
             \tsyscall\n"
        );

        assert_eq!(compile("fn main() { return; }").unwrap(), expected);
        assert_eq!(compile("fn main() {}").unwrap(), expected);
    }

    #[test]
    fn chained_addition() {
        let expected = format!(
            "{PREAMBLE}_start:\n\
             \tmov rax, 28\n\
             \tpush rax\n\
             \tmov rax, 9\n\
             \tpush rax\n\
             \tpop rdi\n\
             \tpop rax\n\
             \tadd rax, rdi\n\
             \tpush rax\n\
             \tmov rax, 5\n\
             \tpush rax\n\
             \tpop rdi\n\
             \tpop rax\n\
             \tadd rax, rdi\n\
             \tpush rax\n\
             \tmov rax, 60\n\
             \tpop rdi\n\
             \tsyscall\n"
        );

        assert_eq!(
            compile("fn main(): i64 { return 28 + 9 + 5; }").unwrap(),
            expected
        );
    }

    #[test]
    fn division_sign_extends_the_dividend() {
        let expected = format!(
            "{PREAMBLE}_start:\n\
             \tmov rax, 7\n\
             \tpush rax\n\
             \tmov rax, 2\n\
             \tpush rax\n\
             \tpop rdi\n\
             \tpop rax\n\
             \tcqo\n\
             \tidiv rdi\n\
             \tpush rax\n\
             \tmov rax, 60\n\
             \tpop rdi\n\
             \tsyscall\n"
        );

        assert_eq!(
            compile("fn main(): i64 { return 7 / 2; }").unwrap(),
            expected
        );
    }

    #[test]
    fn negative_dividend() {
        // (0 - 9) / 2: rax is negative going into the divide, so cqo must
        // precede idiv or the quotient is garbage
        let asm = compile("fn main(): i64 { return (0 - 9) / 2; }").unwrap();

        assert!(asm.contains("\tsub rax, rdi\n"));
        assert!(asm.contains("\tcqo\n\tidiv rdi\n"));
    }

    #[test]
    fn subtraction_operand_order() {
        let asm = compile("fn main(): i64 { return 5 - 3; }").unwrap();

        // left operand must be popped into rax, right into rdi
        assert!(asm.contains(
            "\tmov rax, 5\n\
             \tpush rax\n\
             \tmov rax, 3\n\
             \tpush rax\n\
             \tpop rdi\n\
             \tpop rax\n\
             \tsub rax, rdi\n"
        ));
    }

    #[test]
    fn assignment_emits_nothing() {
        let with_assign = compile("fn main(): i64 { x: i64 = 1; return 2; }").unwrap();
        let without = compile("fn main(): i64 { return 2; }").unwrap();

        assert_eq!(with_assign, without);
    }

    #[test]
    fn non_main_function_is_rejected() {
        assert_eq!(
            compile("fn helper(): i64 { return 1; }"),
            Err(CodegenError::UnsupportedFunction("helper".to_owned()))
        );
    }

    #[test]
    fn exit_syscall_comes_from_the_platform() {
        let asm = compile("fn main() {}").unwrap();
        assert!(asm.contains(&format!("\tmov rax, {}\n", platform().exit_syscall)));
    }
}
