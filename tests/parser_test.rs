// A small statement language parsed with the token cursor and the operator shunter.
// Run with `cargo test --test parser_test`

use std::collections::HashMap;

use lxr::{
    standard_patterns, BinaryNode, LxrError, LxrErrorKind, OperatorShunter, PatternDefinition,
    PrecedenceTable, Result, TokenCursor, Tokenizer, TokenizerBuilder,
};

#[derive(Debug, Clone, PartialEq)]
enum Primary {
    Number(i64),
    Variable(String),
}

type Expr = BinaryNode<Primary>;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn tokenizer() -> Tokenizer {
    TokenizerBuilder::new()
        .language_name("assignments")
        .add_pattern(standard_patterns::whitespace_with_newlines())
        .add_pattern(PatternDefinition::regex("let", r"let\b"))
        .add_pattern(PatternDefinition::regex("identifier", r"[a-z_]\w*"))
        .add_pattern(PatternDefinition::regex("operator", r"[-+*/%]"))
        .add_pattern(standard_patterns::integer())
        .add_pattern(standard_patterns::constant("=", "equals"))
        .add_pattern(standard_patterns::constant(";", "semicolon"))
        .add_pattern(standard_patterns::open_paren())
        .add_pattern(standard_patterns::close_paren())
        .build()
        .unwrap()
}

fn precedences() -> PrecedenceTable {
    [("+", 13), ("-", 13), ("*", 14), ("/", 14)]
        .into_iter()
        .collect()
}

struct Parser<'t> {
    cursor: TokenCursor<'t>,
    precedences: &'t PrecedenceTable,
}

impl<'t> Parser<'t> {
    /// Parses all statements. Statements with syntax errors are skipped up to the next
    /// semicolon.
    fn parse_program(&mut self) -> (Vec<(String, Expr)>, Vec<LxrError>) {
        let mut statements = Vec::new();
        let mut errors = Vec::new();
        while !self.cursor.at_end() {
            match self.parse_statement() {
                Ok(statement) => statements.push(statement),
                Err(e) => {
                    errors.push(e);
                    self.cursor.resynchronize("semicolon");
                }
            }
        }
        (statements, errors)
    }

    fn parse_statement(&mut self) -> Result<(String, Expr)> {
        self.cursor.match_token("let")?;
        let name = self.cursor.match_token("identifier")?.content().to_string();
        self.cursor.match_token("equals")?;
        let expr = self.parse_expression()?;
        self.cursor.match_token("semicolon")?;
        Ok((name, expr))
    }

    fn parse_expression(&mut self) -> Result<Expr> {
        let mut shunter = OperatorShunter::new(self.precedences);
        shunter.push_operand(self.parse_primary()?);
        while !self.cursor.at_end() && self.cursor.looking_at("operator")? {
            shunter.push_operator(self.cursor.advance()?.clone())?;
            shunter.push_operand(self.parse_primary()?);
        }
        shunter.finish()
    }

    fn parse_primary(&mut self) -> Result<Expr> {
        let token = self.cursor.peek()?;
        match token.token_type() {
            "integer" => {
                self.cursor.advance()?;
                let value = token.content().as_integer().unwrap_or_default();
                Ok(BinaryNode::Operand(Primary::Number(value)))
            }
            "identifier" => {
                self.cursor.advance()?;
                Ok(BinaryNode::Operand(Primary::Variable(
                    token.content().to_string(),
                )))
            }
            "open paren" => {
                self.cursor.advance()?;
                let expr = self.parse_expression()?;
                self.cursor.match_token("close paren")?;
                Ok(expr)
            }
            found => Err(LxrError::new(LxrErrorKind::UnexpectedToken {
                expected: "expression".to_string(),
                found: found.to_string(),
                line: token.line(),
                character: token.character(),
                length: token.text_len(),
            })),
        }
    }
}

fn parse(input: &str) -> (Vec<(String, Expr)>, Vec<LxrError>) {
    let tokens = tokenizer().tokenize(input).unwrap();
    let precedences = precedences();
    let mut parser = Parser {
        cursor: TokenCursor::new(&tokens),
        precedences: &precedences,
    };
    parser.parse_program()
}

fn evaluate(expr: &Expr, variables: &HashMap<String, i64>) -> Option<i64> {
    match expr {
        BinaryNode::Operand(Primary::Number(n)) => Some(*n),
        BinaryNode::Operand(Primary::Variable(name)) => variables.get(name).copied(),
        BinaryNode::Binary {
            operator,
            left,
            right,
        } => {
            let left = evaluate(left, variables)?;
            let right = evaluate(right, variables)?;
            match operator.content().to_string().as_str() {
                "+" => Some(left + right),
                "-" => Some(left - right),
                "*" => Some(left * right),
                "/" => left.checked_div(right),
                _ => None,
            }
        }
    }
}

fn run(statements: &[(String, Expr)]) -> HashMap<String, i64> {
    let mut variables = HashMap::new();
    for (name, expr) in statements {
        let value = evaluate(expr, &variables).unwrap();
        variables.insert(name.clone(), value);
    }
    variables
}

#[test]
fn test_program() {
    init();
    let (statements, errors) =
        parse("let a = 1 + 2 * 3 - 4;\nlet b = (a + 1) * 2;\nlet d = b / 2 - a;\n");
    assert!(errors.is_empty(), "{:?}", errors);
    let variables = run(&statements);
    assert_eq!(variables["a"], 3);
    assert_eq!(variables["b"], 8);
    assert_eq!(variables["d"], 1);
}

#[test]
fn test_tree_shape() {
    init();
    let (statements, _) = parse("let d = b / 2 - a;");
    let BinaryNode::Binary {
        operator,
        left,
        right,
    } = &statements[0].1
    else {
        panic!("expected a binary node");
    };
    assert_eq!(operator.content().to_string(), "-");
    assert_eq!(
        **right,
        BinaryNode::Operand(Primary::Variable("a".to_string()))
    );
    assert!(
        matches!(&**left, BinaryNode::Binary { operator, .. } if operator.content().to_string() == "/")
    );
}

#[test]
fn test_keyword_prefix_is_an_identifier() {
    init();
    let (statements, errors) = parse("let letter = 1;");
    assert!(errors.is_empty());
    assert_eq!(statements[0].0, "letter");
}

#[test]
fn test_recovery_after_syntax_error() {
    init();
    let (statements, errors) = parse("let a = 2;\nlet c = a + ;\nlet d = a * 5;\n");
    assert_eq!(errors.len(), 1);
    match errors[0].kind() {
        LxrErrorKind::UnexpectedToken {
            expected,
            found,
            line,
            character,
            length,
        } => {
            assert_eq!(expected, "expression");
            assert_eq!(found, "semicolon");
            assert_eq!((*line, *character, *length), (2, 13, 1));
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(
        errors[0].to_string(),
        "Expected expression but found semicolon at 2.13"
    );

    let variables = run(&statements);
    assert_eq!(variables.len(), 2);
    assert_eq!(variables["d"], 10);
}

#[test]
fn test_missing_semicolon() {
    init();
    let (statements, errors) = parse("let x = 1 let y = 2; let z = 3;");
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "Expected semicolon but found let at 1.11"
    );
    // The statement of `y` was skipped during recovery.
    assert_eq!(statements.len(), 1);
    assert_eq!(statements[0].0, "z");
}

#[test]
fn test_unknown_operator() {
    init();
    let (statements, errors) = parse("let e = 5 % 2;");
    assert!(statements.is_empty());
    assert!(errors[0].is_parser_error());
    assert!(matches!(
        errors[0].kind(),
        LxrErrorKind::UnexpectedToken { expected, line: 1, character: 11, .. }
            if expected == "% is not a valid operator"
    ));
}

#[test]
fn test_unexpected_end_of_input() {
    init();
    let (statements, errors) = parse("let a = 1 +");
    assert!(statements.is_empty());
    assert_eq!(errors.len(), 1);
    assert!(errors[0].is_parser_error());

    let (_, errors) = parse("let a = 1");
    assert_eq!(errors[0].to_string(), "Expected semicolon but found EOF");
}
