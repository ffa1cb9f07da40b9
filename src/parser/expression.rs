//! Expression parsing by precedence climbing.
//!
//! Every expression form is parsed by a prefix function, looked up by the
//! kind of the token that starts it, optionally followed by any number of
//! infix functions, looked up by the kind of the operator token. Both tables
//! are filled in by [`Parser::new`].
use crate::{ast::*, lexer::tokens::TokenKind};

use super::{
    error::{Reason, Stage},
    parser_base::{Parser, MAX_NESTING},
    precedence::Precedence,
};

impl<'s> Parser<'s> {
    /// Parses an expression whose operators all bind more tightly than `precedence`.
    pub(super) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        if self.depth >= MAX_NESTING {
            self.record_error(
                Stage::Expression,
                Reason::NestingTooDeep(MAX_NESTING),
                self.cur_token.source,
            );
            return None;
        }

        self.depth += 1;
        let expression = self.parse_unbounded_expression(precedence);
        self.depth -= 1;
        expression
    }

    fn parse_unbounded_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let Some(prefix) = self.prefix_parse_fn(self.cur_token.kind) else {
            self.record_error(
                Stage::Expression,
                Reason::NoPrefixParseFn(self.cur_token.kind),
                self.cur_token.source,
            );
            return None;
        };
        let mut left = prefix(self)?;

        while !self.peek_token_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = self.infix_parse_fn(self.peek_token.kind) else {
                return Some(left);
            };
            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }

    pub(super) fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(Identifier::new(
            self.cur_token.clone(),
        )))
    }

    pub(super) fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral(IntegerLiteral { token, value })),
            Err(_) => {
                let reason = Reason::InvalidInteger(token.literal.clone());
                self.record_error(Stage::Expression, reason, token.source);
                None
            }
        }
    }

    pub(super) fn parse_boolean(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        let value = token.is(TokenKind::True);
        Some(Expression::Boolean(Boolean { token, value }))
    }

    pub(super) fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        // Only registered for operator tokens.
        let operator = PrefixOperator::for_token(token.kind)?;
        self.next_token();

        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expression::Prefix(Box::new(PrefixExpression {
            token,
            operator,
            right,
        })))
    }

    pub(super) fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = InfixOperator::for_token(token.kind)?;
        let precedence = self.cur_precedence();
        self.next_token();

        let right = self.parse_expression(precedence)?;
        Some(Expression::Infix(Box::new(InfixExpression {
            token,
            left,
            operator,
            right,
        })))
    }

    pub(super) fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();

        let expression = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RParen, Stage::GroupedExpression) {
            return None;
        }
        Some(expression)
    }

    pub(super) fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::LParen, Stage::IfExpression) {
            return None;
        }
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen, Stage::IfExpression)
            || !self.expect_peek(TokenKind::LBrace, Stage::IfExpression)
        {
            return None;
        }
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_token_is(TokenKind::Else) {
            self.next_token();
            if !self.expect_peek(TokenKind::LBrace, Stage::IfExpression) {
                return None;
            }
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::If(Box::new(IfExpression {
            token,
            condition,
            consequence,
            alternative,
        })))
    }

    pub(super) fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::LParen, Stage::FunctionLiteral) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::LBrace, Stage::FunctionLiteral) {
            return None;
        }
        let body = self.parse_block_statement();

        Some(Expression::Function(FunctionLiteral {
            token,
            parameters,
            body,
        }))
    }

    /// Parses `a, b, c)`, with the opening parenthesis as the current token.
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = vec![];

        if self.peek_token_is(TokenKind::RParen) {
            self.next_token();
            return Some(parameters);
        }

        loop {
            if !self.expect_peek(TokenKind::Identifier, Stage::FunctionParameters) {
                return None;
            }
            parameters.push(Identifier::new(self.cur_token.clone()));

            if !self.peek_token_is(TokenKind::Comma) {
                break;
            }
            self.next_token();
        }

        if !self.expect_peek(TokenKind::RParen, Stage::FunctionParameters) {
            return None;
        }
        Some(parameters)
    }

    pub(super) fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let token = self.cur_token.clone();
        let arguments = self.parse_call_arguments()?;

        Some(Expression::Call(Box::new(CallExpression {
            token,
            function,
            arguments,
        })))
    }

    /// Parses `x, y + 1, z)`, with the opening parenthesis as the current token.
    fn parse_call_arguments(&mut self) -> Option<Vec<Expression>> {
        let mut arguments = vec![];

        if self.peek_token_is(TokenKind::RParen) {
            self.next_token();
            return Some(arguments);
        }

        self.next_token();
        arguments.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            arguments.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(TokenKind::RParen, Stage::CallArguments) {
            return None;
        }
        Some(arguments)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        lexer::Lexer,
        parser::{parse, ParseError},
    };

    use super::*;

    macro_rules! assert_parses {
        ($source:expr, $expected:expr) => {{
            let program = match parse($source) {
                Ok(program) => program,
                Err(errors) => {
                    panic!(
                        "\n\nEncountered errors:\n{:#?}\nWhen parsing:\n    {}\n\n",
                        errors, $source,
                    );
                }
            };
            let pretty = program.to_string();

            assert_eq!(
                $expected, pretty,
                "\n\nWhen parsing:\n    {}\nExpected to find:\n    {}\nBut found:\n    {}\n\n",
                $source, $expected, pretty
            );
        }};
    }

    /// Parses a source consisting of a single expression statement.
    fn parse_expression(source: &str) -> Expression {
        let mut program = match parse(source) {
            Ok(program) => program,
            Err(errors) => panic!("Unexpected errors {:#?} when parsing {}", errors, source),
        };
        assert_eq!(
            program.statements.len(),
            1,
            "Expected a single statement in {}",
            program
        );
        match program.statements.remove(0) {
            Statement::Expression(stmt) => stmt.value,
            other => panic!("Expected an expression statement, found {:?}", other),
        }
    }

    fn parse_errors(source: &str) -> Vec<ParseError> {
        let mut parser = Parser::new(Lexer::new(source));
        parser.parse_program();
        parser.errors().to_vec()
    }

    #[test]
    fn identifier_expression() {
        match parse_expression("foobar;") {
            Expression::Identifier(id) => {
                assert_eq!(id.name, "foobar");
                assert_eq!(id.token.kind, TokenKind::Identifier);
            }
            other => panic!("Expected an identifier, found {:?}", other),
        }
    }

    #[test]
    fn integer_literal_expression() {
        match parse_expression("5;") {
            Expression::IntegerLiteral(int) => {
                assert_eq!(int.value, 5);
                assert_eq!(int.token.literal, "5");
            }
            other => panic!("Expected an integer literal, found {:?}", other),
        }
    }

    #[test]
    fn integer_literal_displays_its_source_text() {
        assert_parses!("007", "007");
        assert_parses!("let x = 0012 + 1;", "let x = (0012 + 1);");
    }

    #[test]
    fn integer_literal_out_of_range() {
        let errors = parse_errors("99999999999999999999;");

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].to_string(),
            r#"could not parse "99999999999999999999" as integer"#
        );
    }

    #[test]
    fn boolean_expressions() {
        for (source, expected) in [("true;", true), ("false;", false)] {
            match parse_expression(source) {
                Expression::Boolean(b) => assert_eq!(b.value, expected),
                other => panic!("Expected a boolean, found {:?}", other),
            }
        }
    }

    #[test]
    fn prefix_expressions() {
        for (source, operator, right) in [
            ("!5;", PrefixOperator::Not, "5"),
            ("-15;", PrefixOperator::Negate, "15"),
            ("!true;", PrefixOperator::Not, "true"),
        ] {
            match parse_expression(source) {
                Expression::Prefix(pre) => {
                    assert_eq!(pre.operator, operator);
                    assert_eq!(pre.right.to_string(), right);
                }
                other => panic!("Expected a prefix expression, found {:?}", other),
            }
        }
    }

    #[test]
    fn infix_expressions() {
        for (source, operator) in [
            ("5 + 5;", InfixOperator::Add),
            ("5 - 5;", InfixOperator::Subtract),
            ("5 * 5;", InfixOperator::Multiply),
            ("5 / 5;", InfixOperator::Divide),
            ("5 > 5;", InfixOperator::GreaterThan),
            ("5 < 5;", InfixOperator::LessThan),
            ("5 == 5;", InfixOperator::Equal),
            ("5 != 5;", InfixOperator::NotEqual),
        ] {
            match parse_expression(source) {
                Expression::Infix(inf) => {
                    assert_eq!(inf.operator, operator);
                    assert_eq!(inf.left.to_string(), "5");
                    assert_eq!(inf.right.to_string(), "5");
                }
                other => panic!("Expected an infix expression, found {:?}", other),
            }
        }
    }

    #[test]
    fn add_sub_are_left_associative() {
        assert_parses!("a + b + c", "((a + b) + c)");
        assert_parses!("a - b - c", "((a - b) - c)");
        assert_parses!("a + b - c", "((a + b) - c)");
    }

    #[test]
    fn mult_div_are_left_associative() {
        assert_parses!("a * b * c", "((a * b) * c)");
        assert_parses!("a * b / c", "((a * b) / c)");
    }

    #[test]
    fn product_binds_tighter_than_sum() {
        assert_parses!("a + b * c", "(a + (b * c))");
        assert_parses!("a + b / c", "(a + (b / c))");
        assert_parses!(
            "a + b * c + d / e - f",
            "(((a + (b * c)) + (d / e)) - f)"
        );
    }

    #[test]
    fn prefix_binds_tighter_than_infix() {
        assert_parses!("-a * b", "((-a) * b)");
        assert_parses!("!-a", "(!(-a))");
    }

    #[test]
    fn comparisons() {
        assert_parses!("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))");
        assert_parses!("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))");
        assert_parses!(
            "3 + 4 * 5 == 3 * 1 + 4 * 5",
            "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"
        );
        assert_parses!("3 > 5 == false", "((3 > 5) == false)");
        assert_parses!("!(true == true)", "(!(true == true))");
    }

    #[test]
    fn statements_separated_by_semicolons() {
        assert_parses!("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)");
    }

    #[test]
    fn grouped_expressions() {
        assert_parses!("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)");
        assert_parses!("(5 + 5) * 2", "((5 + 5) * 2)");
        assert_parses!("2 / (5 + 5)", "(2 / (5 + 5))");
        assert_parses!("-(5 + 5)", "(-(5 + 5))");
    }

    #[test]
    fn unclosed_group_is_an_error() {
        let errors = parse_errors("(1 + 2;");

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].to_string(),
            "expected next token to be RParen, got Semicolon instead"
        );
        assert_eq!(errors[0].stage(), Stage::GroupedExpression);
    }

    #[test]
    fn call_expressions() {
        assert_parses!("a + add(b * c) + d", "((a + add((b * c))) + d)");
        assert_parses!(
            "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
            "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"
        );
        assert_parses!(
            "add(a + b + c * d / f + g)",
            "add((((a + b) + ((c * d) / f)) + g))"
        );
    }

    #[test]
    fn call_expression_structure() {
        match parse_expression("add(1, 2 * 3, 4 + 5);") {
            Expression::Call(call) => {
                assert_eq!(call.function.to_string(), "add");
                let arguments: Vec<_> = call.arguments.iter().map(ToString::to_string).collect();
                assert_eq!(arguments, vec!["1", "(2 * 3)", "(4 + 5)"]);
                assert_eq!(call.token.kind, TokenKind::LParen);
            }
            other => panic!("Expected a call expression, found {:?}", other),
        }
    }

    #[test]
    fn call_without_arguments() {
        assert_parses!("tick()", "tick()");
    }

    #[test]
    fn unclosed_call_is_an_error() {
        let errors = parse_errors("add(1, 2;");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].stage(), Stage::CallArguments);
    }

    #[test]
    fn if_expression() {
        match parse_expression("if (x < y) { x }") {
            Expression::If(if_expr) => {
                assert_eq!(if_expr.condition.to_string(), "(x < y)");
                assert_eq!(if_expr.consequence.statements.len(), 1);
                assert_eq!(if_expr.consequence.to_string(), "x");
                assert!(if_expr.alternative.is_none());
            }
            other => panic!("Expected an if expression, found {:?}", other),
        }
    }

    #[test]
    fn if_else_expression() {
        match parse_expression("if (x < y) { x } else { y }") {
            Expression::If(if_expr) => {
                assert_eq!(if_expr.consequence.to_string(), "x");
                let alternative = if_expr.alternative.expect("Missing else block");
                assert_eq!(alternative.to_string(), "y");
            }
            other => panic!("Expected an if expression, found {:?}", other),
        }
        assert_parses!("if (x < y) { x } else { y }", "if (x < y) x else y");
    }

    #[test]
    fn if_requires_parenthesised_condition() {
        let errors = parse_errors("if x { y }");

        assert_eq!(
            errors[0].to_string(),
            "expected next token to be LParen, got Identifier instead"
        );
        assert_eq!(errors[0].stage(), Stage::IfExpression);
    }

    #[test]
    fn function_literal() {
        match parse_expression("fn(x, y) { x + y; }") {
            Expression::Function(fun) => {
                let parameters: Vec<_> = fun.parameters.iter().map(|p| p.name.as_str()).collect();
                assert_eq!(parameters, vec!["x", "y"]);
                assert_eq!(fun.body.statements.len(), 1);
                assert_eq!(fun.body.to_string(), "(x + y)");
            }
            other => panic!("Expected a function literal, found {:?}", other),
        }
    }

    #[test]
    fn function_parameters() {
        for (source, expected) in [
            ("fn() {};", vec![]),
            ("fn(x) {};", vec!["x"]),
            ("fn(x, y, z) {};", vec!["x", "y", "z"]),
        ] {
            match parse_expression(source) {
                Expression::Function(fun) => {
                    let parameters: Vec<_> =
                        fun.parameters.iter().map(|p| p.name.as_str()).collect();
                    assert_eq!(parameters, expected);
                }
                other => panic!("Expected a function literal, found {:?}", other),
            }
        }
    }

    #[test]
    fn function_parameters_must_be_identifiers() {
        let errors = parse_errors("fn(x, 1) { x };");

        assert_eq!(errors.len(), 1, "Unexpected errors: {:#?}", errors);
        assert_eq!(
            errors[0].to_string(),
            "expected next token to be Identifier, got IntegerLiteral instead"
        );
        assert_eq!(errors[0].stage(), Stage::FunctionParameters);
    }

    #[test]
    fn function_literal_display() {
        assert_parses!(
            "let add = fn(a, b) { return a + b; };",
            "let add = fn(a, b) return (a + b);;"
        );
    }

    #[test]
    fn immediately_called_function() {
        assert_parses!("fn(x) { x }(5)", "fn(x) x(5)");
    }

    #[test]
    fn moderate_nesting_parses() {
        assert_parses!("((((((((1))))))))", "1");
        assert_parses!("-(-(-(-x)))", "(-(-(-(-x))))");
    }

    #[test]
    fn deeply_nested_groups_are_rejected() {
        let source = format!("{}x", "(".repeat(10_000));
        let errors = parse_errors(&source);

        assert_eq!(errors.len(), 1, "Unexpected errors: {:#?}", errors);
        assert_eq!(errors[0].reason(), &Reason::NestingTooDeep(MAX_NESTING));
        assert_eq!(errors[0].stage(), Stage::Expression);
    }

    #[test]
    fn long_prefix_runs_are_rejected() {
        let source = format!("{}x; y", "-".repeat(10_000));
        let mut parser = Parser::new(Lexer::new(&source));
        let program = parser.parse_program();

        assert_eq!(
            parser.error_messages(),
            vec![format!("expression nested more than {} levels deep", MAX_NESTING)]
        );
        assert_eq!(program.to_string(), "y");
    }
}
