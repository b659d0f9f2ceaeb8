use std::io::Write;

use log::trace;
use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_till1},
    character::complete::{char, digit1, line_ending, space1},
    combinator::{eof, map_res, opt, peek, recognize, value},
    sequence::{pair, terminated},
};

use crate::{
    error::Result,
    io::{is_any_line_break, skip_blank_lines, skip_line_end, skip_whitespace, translate_nom_error},
    sequence::Strand,
};

use super::{Feature, FeatureSet};

impl FeatureSet {
    /// Reads a feature table.
    ///
    /// Each line holds `<start> <end> [<strand>] [<name>]`, where strand is one of `+`, `-` or `.`.
    /// Text after a `#` is ignored.
    pub fn read_plain(mut reader: impl std::io::Read) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        let input = input.as_str();
        Self::parse_plain(input)
            .map(|(_, result)| result)
            .map_err(translate_nom_error)
    }

    pub fn write_plain(&self, mut writer: impl Write) -> Result<()> {
        for feature in &self.features {
            write!(writer, "{} {} {}", feature.start, feature.end, feature.strand)?;
            if let Some(name) = &feature.name {
                write!(writer, " {name}")?;
            }
            writeln!(writer)?;
        }

        Ok(())
    }

    fn parse_plain(input: &str) -> IResult<&str, Self> {
        let mut features = Vec::new();
        let (mut input, ()) = skip_blank_lines(input)?;

        while !input.is_empty() {
            let feature;
            (input, feature) = parse_feature(input)?;
            trace!("Parsed feature {feature}");
            features.push(feature);
            (input, _) = skip_blank_lines(input)?;
        }

        Ok((input, Self { features }))
    }
}

fn parse_feature(input: &str) -> IResult<&str, Feature> {
    let input = skip_whitespace(input)?;
    let (input, start) = parse_coordinate(input)?;
    let (input, _) = space1(input)?;
    let (input, end) = parse_coordinate(input)?;
    let input = skip_whitespace(input)?;
    let (input, strand) = opt(parse_strand)(input)?;
    let input = skip_whitespace(input)?;
    let (input, name) = opt(take_till1(|c: char| {
        is_any_line_break(c) || c == '#'
    }))(input)?;
    let (input, ()) = skip_line_end(input)?;

    Ok((
        input,
        Feature {
            start,
            end,
            strand: strand.unwrap_or(Strand::None),
            name: name.map(|name| name.trim_end().to_string()),
        },
    ))
}

fn parse_coordinate(input: &str) -> IResult<&str, isize> {
    map_res(recognize(pair(opt(char('-')), digit1)), |coordinate: &str| {
        coordinate.parse::<isize>()
    })(input)
}

/// A strand is a single character that stands alone, otherwise it is the start of the name.
fn parse_strand(input: &str) -> IResult<&str, Strand> {
    terminated(
        alt((
            value(Strand::Forward, char('+')),
            value(Strand::Reverse, char('-')),
            value(Strand::None, char('.')),
        )),
        peek(alt((space1, line_ending, tag("#"), eof))),
    )(input)
}
