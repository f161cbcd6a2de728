use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    combinator::{map, opt},
    multi::many1,
    sequence::{delimited, terminated},
    IResult,
};
use comma_protocol::{NodeId, ParseTreeRecord, Span, TreeNodeRecord};

use crate::error::TreeError;

/// Label given to a bracket without one, as in `( (S ...) )`.
pub const DEFAULT_ROOT_LABEL: &str = "ROOT";

/// A tree read from Penn Treebank bracket notation, with the words at its leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bracketed {
    pub tree: ParseTreeRecord,
    pub tokens: Vec<String>,
}

impl Bracketed {
    /// The leaves joined by single spaces, ready to serve as sentence text.
    pub fn sentence(&self) -> String {
        self.tokens.join(" ")
    }
}

#[derive(Debug)]
enum Bracket<'a> {
    Phrase(Option<&'a str>, Vec<Bracket<'a>>),
    Preterminal(Option<&'a str>, &'a str),
}

enum Body<'a> {
    Children(Vec<Bracket<'a>>),
    Word(&'a str),
}

fn symbol(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && c != '(' && c != ')')(input)
}

fn node(input: &str) -> IResult<&str, Bracket<'_>> {
    let (input, _) = terminated(char('('), multispace0)(input)?;
    let (input, label) = terminated(opt(symbol), multispace0)(input)?;
    let (input, body) = alt((
        map(many1(terminated(node, multispace0)), Body::Children),
        map(terminated(symbol, multispace0), Body::Word),
    ))(input)?;
    let (input, _) = char(')')(input)?;

    let bracket = match body {
        Body::Children(children) => Bracket::Phrase(label, children),
        Body::Word(word) => Bracket::Preterminal(label, word),
    };
    Ok((input, bracket))
}

/// Parse one bracketed tree. Token spans are assigned to preterminals left to right.
pub fn parse_bracketed(input: &str) -> Result<Bracketed, TreeError> {
    let (rest, root) = delimited(multispace0, node, multispace0)(input).map_err(|e| {
        let remaining = match &e {
            nom::Err::Error(err) | nom::Err::Failure(err) => err.input,
            nom::Err::Incomplete(_) => "",
        };
        TreeError::Syntax {
            offset: input.len() - remaining.len(),
            message: format!("unexpected input near {:?}", remaining.chars().take(12).collect::<String>()),
        }
    })?;

    if !rest.is_empty() {
        return Err(TreeError::Syntax {
            offset: input.len() - rest.len(),
            message: "trailing input after the root bracket".to_string(),
        });
    }

    let mut out = Bracketed {
        tree: ParseTreeRecord { root: NodeId::new(0), nodes: Vec::new() },
        tokens: Vec::new(),
    };
    flatten(&root, &mut out);
    Ok(out)
}

/// Pre-order flattening; returns the id given to `bracket`.
fn flatten(bracket: &Bracket, out: &mut Bracketed) -> NodeId {
    let id = NodeId::new(out.tree.nodes.len() as u32);
    let start = out.tokens.len();

    match bracket {
        Bracket::Preterminal(label, word) => {
            out.tokens.push(word.to_string());
            out.tree.nodes.push(TreeNodeRecord {
                label: label.unwrap_or(DEFAULT_ROOT_LABEL).to_string(),
                span: Span::token(start),
                children: Vec::new(),
            });
        }
        Bracket::Phrase(label, children) => {
            out.tree.nodes.push(TreeNodeRecord {
                label: label.unwrap_or(DEFAULT_ROOT_LABEL).to_string(),
                span: Span::new(start, start),
                children: Vec::new(),
            });
            let kids: Vec<NodeId> = children.iter().map(|c| flatten(c, out)).collect();
            let node = &mut out.tree.nodes[id.index()];
            node.span.end = out.tokens.len();
            node.children = kids;
        }
    }
    id
}
