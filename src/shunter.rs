//! Module with the operator precedence shunter.
//!
//! The shunter builds expression trees from a strictly alternating stream of operands and binary
//! infix operators. It neither handles unary operators nor parentheses nor function calls; the
//! caller parses those into operands before pushing them.

use log::trace;
use rustc_hash::FxHashMap;

use crate::{LxrError, LxrErrorKind, Result, Token};

/// The ranks of the operator symbols. Higher ranks bind tighter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrecedenceTable {
    ranks: FxHashMap<String, u32>,
}

impl PrecedenceTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rank of an operator symbol.
    pub fn insert(&mut self, symbol: impl Into<String>, rank: u32) -> Option<u32> {
        self.ranks.insert(symbol.into(), rank)
    }

    /// Gets the rank of an operator symbol.
    #[inline]
    pub fn rank(&self, symbol: &str) -> Option<u32> {
        self.ranks.get(symbol).copied()
    }

    /// The number of operator symbols in the table.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for PrecedenceTable {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self {
            ranks: iter
                .into_iter()
                .map(|(symbol, rank)| (symbol.into(), rank))
                .collect(),
        }
    }
}

/// Creates the tree node for a binary operator and its operands.
pub trait AstBuilder<N> {
    /// Combines `left` and `right` under `operator`.
    fn build(&self, operator: Token, left: N, right: N) -> N;
}

impl<N, F> AstBuilder<N> for F
where
    F: Fn(Token, N, N) -> N,
{
    fn build(&self, operator: Token, left: N, right: N) -> N {
        self(operator, left, right)
    }
}

/// The default tree built by the [OperatorShunter].
#[derive(Debug, Clone, PartialEq)]
pub enum BinaryNode<T> {
    /// An operand pushed by the caller.
    Operand(T),
    /// A binary operation.
    Binary {
        /// The operator token.
        operator: Token,
        /// The left operand.
        left: Box<BinaryNode<T>>,
        /// The right operand.
        right: Box<BinaryNode<T>>,
    },
}

/// The default [AstBuilder] which creates [BinaryNode::Binary] nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryBuilder;

impl<T> AstBuilder<BinaryNode<T>> for BinaryBuilder {
    fn build(&self, operator: Token, left: BinaryNode<T>, right: BinaryNode<T>) -> BinaryNode<T> {
        BinaryNode::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Builds an expression tree from operands and binary operators following the shunting-yard
/// algorithm.
///
/// Operands are pushed with [OperatorShunter::push_operand], operators with
/// [OperatorShunter::push_operator]. When a new operator doesn't bind tighter than the operator
/// on top of the stack, the top operator is collapsed with the last two operands first. Equal
/// ranks are thereby left-associative. [OperatorShunter::finish] collapses the rest and returns
/// the root.
#[derive(Debug)]
pub struct OperatorShunter<'p, N, B = BinaryBuilder> {
    precedences: &'p PrecedenceTable,
    builder: B,
    operators: Vec<Token>,
    output: Vec<N>,
}

impl<'p, T> OperatorShunter<'p, BinaryNode<T>, BinaryBuilder> {
    /// Creates a shunter that builds [BinaryNode]s.
    pub fn new(precedences: &'p PrecedenceTable) -> Self {
        Self::with_builder(precedences, BinaryBuilder)
    }
}

impl<'p, N, B> OperatorShunter<'p, N, B>
where
    B: AstBuilder<N>,
{
    /// Creates a shunter that builds its nodes with the given builder.
    pub fn with_builder(precedences: &'p PrecedenceTable, builder: B) -> Self {
        Self {
            precedences,
            builder,
            operators: Vec::new(),
            output: Vec::new(),
        }
    }

    /// Pushes an operand or an already built sub-expression.
    pub fn push_operand(&mut self, value: N) {
        self.output.push(value);
    }

    /// Pushes a binary operator. The operator symbol is the token's content.
    ///
    /// # Errors
    /// * The symbol is not in the precedence table.
    /// * An operator has to be collapsed but there are less than two operands available.
    pub fn push_operator(&mut self, operator: Token) -> Result<()> {
        let rank = self.rank_of(&operator)?;
        trace!("Shunt operator {} with rank {}", operator.content(), rank);
        if let Some(top) = self.operators.last() {
            // The top operator has passed `rank_of` when it was pushed.
            let top_rank = self.rank_of(top)?;
            if rank <= top_rank {
                if let Some(top) = self.operators.pop() {
                    self.collapse(top)?;
                }
            }
        }
        self.operators.push(operator);
        Ok(())
    }

    /// Collapses all pending operators and returns the root of the expression.
    ///
    /// # Errors
    /// The expression is malformed, i.e. after collapsing there is not exactly one item left.
    pub fn finish(mut self) -> Result<N> {
        while let Some(operator) = self.operators.pop() {
            self.collapse(operator)?;
        }
        match self.output.len() {
            1 => self.output.pop().ok_or_else(|| malformed("no operands")),
            0 => Err(malformed("no operands")),
            _ => Err(malformed("multiple unreduced operands")),
        }
    }

    fn rank_of(&self, operator: &Token) -> Result<u32> {
        let symbol = operator.content().to_string();
        self.precedences.rank(&symbol).ok_or_else(|| {
            LxrError::new(LxrErrorKind::UnexpectedToken {
                expected: format!("{} is not a valid operator", symbol),
                found: operator.token_type().to_string(),
                line: operator.line(),
                character: operator.character(),
                length: operator.text_len(),
            })
        })
    }

    fn collapse(&mut self, operator: Token) -> Result<()> {
        let missing = || {
            malformed(&format!(
                "operator {} is missing an operand",
                operator.content()
            ))
        };
        // The output stays untouched when the operands are missing.
        let at = self.output.len().checked_sub(2).ok_or_else(missing)?;
        let mut operands = self.output.drain(at..);
        let (Some(left), Some(right)) = (operands.next(), operands.next()) else {
            return Err(missing());
        };
        drop(operands);
        trace!("Collapse operator {}", operator.content());
        let node = self.builder.build(operator, left, right);
        self.output.push(node);
        Ok(())
    }
}

fn malformed(reason: &str) -> LxrError {
    LxrError::new(LxrErrorKind::Parser(format!(
        "malformed expression: {}",
        reason
    )))
}
