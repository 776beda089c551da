use winnow::ascii::{digit1, multispace0};
use winnow::combinator::{alt, cut_err, delimited, preceded, repeat, separated};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::take_while;

use crate::{Path, PathExpr, RuleType};

// -- Identifiers ------------------------------------------------------------

fn ident<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        take_while(1.., |c: char| c.is_ascii_alphabetic() || c == '_' || c == '$'),
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '$'),
    )
        .take()
        .parse_next(input)
}

// -- Paths ------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
enum Segment<'i> {
    Field(&'i str),
    Index(usize),
    Call,
}

fn index(input: &mut &str) -> ModalResult<usize> {
    delimited('[', cut_err(digit1.try_map(|s: &str| s.parse::<usize>())), cut_err(']'))
        .context(StrContext::Expected(StrContextValue::Description("index")))
        .parse_next(input)
}

fn segment<'i>(input: &mut &'i str) -> ModalResult<Segment<'i>> {
    alt((
        preceded(
            '.',
            cut_err(ident).context(StrContext::Expected(StrContextValue::Description(
                "field name",
            ))),
        )
        .map(Segment::Field),
        index.map(Segment::Index),
        "()".value(Segment::Call),
    ))
    .parse_next(input)
}

pub fn path(input: &mut &str) -> ModalResult<Path> {
    let root = ident
        .context(StrContext::Expected(StrContextValue::Description("root")))
        .parse_next(input)?;
    let segments: Vec<Segment<'_>> = repeat(0.., segment).parse_next(input)?;
    Ok(segments
        .into_iter()
        .fold(Path::new(root), |path, segment| match segment {
            Segment::Field(name) => path.field(name),
            Segment::Index(i) => path.index(i),
            Segment::Call => path.call([]),
        }))
}

// -- Operation keys ---------------------------------------------------------

fn rule_type(input: &mut &str) -> ModalResult<RuleType> {
    alt((
        "read".value(RuleType::Read),
        "get".value(RuleType::Get),
        "list".value(RuleType::List),
        "write".value(RuleType::Write),
        "create".value(RuleType::Create),
        "update".value(RuleType::Update),
        "delete".value(RuleType::Delete),
    ))
    .context(StrContext::Expected(StrContextValue::Description(
        "rule type",
    )))
    .parse_next(input)
}

pub fn rule_types(input: &mut &str) -> ModalResult<Vec<RuleType>> {
    delimited(
        multispace0,
        separated(1.., rule_type, (multispace0, ',', multispace0)),
        multispace0,
    )
    .parse_next(input)
}
