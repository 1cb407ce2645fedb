use crate::sequence::NucleotideSequence;
use deepmorph_core::error::{DeepmorphError, DeepmorphResult};
use flate2::read::GzDecoder;
use nom::{
    bytes::complete::{tag, take_till},
    character::complete::{line_ending, not_line_ending, space1},
    combinator::{map, opt},
    sequence::preceded,
    IResult,
};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Identifier given to input that carries no FASTA header
pub const UNNAMED_RECORD: &str = "input";

/// One validated record from a FASTA or plain-text input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub description: Option<String>,
    pub sequence: NucleotideSequence,
}

/// Parse a FASTA header line
fn parse_header(input: &[u8]) -> IResult<&[u8], (&str, Option<&str>)> {
    let (input, _) = tag(b">")(input)?;
    let (input, id) = map(
        take_till(|c: u8| c == b' ' || c == b'\t' || c == b'\n' || c == b'\r'),
        |s| std::str::from_utf8(s).unwrap_or(""),
    )(input)?;
    let (input, description) = opt(preceded(
        space1,
        map(not_line_ending, |s| std::str::from_utf8(s).unwrap_or("")),
    ))(input)?;
    let (input, _) = opt(line_ending)(input)?;
    Ok((input, (id, description)))
}

/// Collect residue lines until the next header or EOF
fn parse_residues(input: &[u8]) -> IResult<&[u8], Vec<u8>> {
    let mut residues = Vec::new();
    let mut remaining = input;

    while !remaining.is_empty() && remaining[0] != b'>' {
        let (rest, line) =
            take_till::<_, _, nom::error::Error<_>>(|c: u8| c == b'\n' || c == b'\r')(remaining)?;
        let (rest, _) = opt(line_ending)(rest)?;
        // A lone '\r' is not a line ending to nom
        let rest = rest.strip_prefix(b"\r").unwrap_or(rest);

        residues.extend(
            line.iter()
                .filter(|c| !c.is_ascii_whitespace())
                .map(|c| c.to_ascii_uppercase()),
        );
        remaining = rest;
    }

    Ok((remaining, residues))
}

fn skip_whitespace(data: &[u8]) -> &[u8] {
    let start = data
        .iter()
        .position(|c| !c.is_ascii_whitespace())
        .unwrap_or(data.len());
    &data[start..]
}

fn validate(id: &str, residues: &[u8]) -> DeepmorphResult<NucleotideSequence> {
    NucleotideSequence::from_bytes(residues).map_err(|e| match e {
        DeepmorphError::InvalidInput(msg) => {
            DeepmorphError::InvalidInput(format!("record '{}': {}", id, msg))
        }
        other => other,
    })
}

/// Parse FASTA from bytes. Every record must pass nucleotide validation.
pub fn parse_fasta_from_bytes(data: &[u8]) -> DeepmorphResult<Vec<FastaRecord>> {
    let mut records = Vec::new();
    let mut remaining = skip_whitespace(data);

    while !remaining.is_empty() {
        if remaining[0] != b'>' {
            return Err(DeepmorphError::Parse(format!(
                "expected '>' at the start of record {}",
                records.len() + 1
            )));
        }

        let (rest, (id, description)) = parse_header(remaining)
            .map_err(|_| DeepmorphError::Parse("Failed to parse FASTA header".to_string()))?;
        let (rest, residues) = parse_residues(rest)
            .map_err(|_| DeepmorphError::Parse("Failed to parse FASTA sequence".to_string()))?;

        if id.is_empty() {
            return Err(DeepmorphError::Parse(format!(
                "record {} has an empty identifier",
                records.len() + 1
            )));
        }

        let description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        records.push(FastaRecord {
            id: id.to_string(),
            description,
            sequence: validate(id, &residues)?,
        });

        remaining = skip_whitespace(rest);
    }

    Ok(records)
}

/// Accept either FASTA or a bare sequence. Input whose first non-blank byte
/// is not `>` becomes a single record named [`UNNAMED_RECORD`].
pub fn parse_input(data: &[u8]) -> DeepmorphResult<Vec<FastaRecord>> {
    let trimmed = skip_whitespace(data);
    if trimmed.first() == Some(&b'>') {
        let records = parse_fasta_from_bytes(trimmed)?;
        debug!("Parsed {} FASTA records", records.len());
        return Ok(records);
    }

    Ok(vec![FastaRecord {
        id: UNNAMED_RECORD.to_string(),
        description: None,
        sequence: validate(UNNAMED_RECORD, data)?,
    }])
}

/// Read a file into memory, decompressing `.gz`
fn read_bytes(path: &Path) -> DeepmorphResult<Vec<u8>> {
    if !path.exists() {
        return Err(DeepmorphError::NotFound(format!(
            "input file {}",
            path.display()
        )));
    }

    let file = File::open(path)?;
    let mut buffer = Vec::new();
    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        GzDecoder::new(BufReader::new(file)).read_to_end(&mut buffer)?;
    } else {
        BufReader::new(file).read_to_end(&mut buffer)?;
    }
    Ok(buffer)
}

/// Parse a FASTA file into records (supports .gz compression)
pub fn parse_fasta<P: AsRef<Path>>(path: P) -> DeepmorphResult<Vec<FastaRecord>> {
    parse_fasta_from_bytes(&read_bytes(path.as_ref())?)
}

/// Read a FASTA or plain sequence file (supports .gz compression)
pub fn read_input<P: AsRef<Path>>(path: P) -> DeepmorphResult<Vec<FastaRecord>> {
    parse_input(&read_bytes(path.as_ref())?)
}
