use tracing::trace;

use super::lexicon::{self, MAX_STATE_WORDS};
use super::{AddressTag, AddressToken};
use crate::error::TokenizerError;

/// Turns free-form address text into an ordered sequence of labelled tokens.
pub trait AddressTokenizer: Send + Sync {
    /// Empty input yields no tokens. An error means this text could not be
    /// handled at all; it never affects other rows.
    fn tokenize(&self, text: &str) -> Result<Vec<AddressToken>, TokenizerError>;
}

/// Word-list driven tokenizer for US-style mailing addresses.
///
/// Reads the zip code and state from the end of the text, then the house
/// number, street and unit from the front. Whatever sits between the two is
/// the place name. Commas and semicolons separate segments and are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleTokenizer;

impl RuleTokenizer {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Clone, Copy)]
struct Lexeme<'a> {
    text: &'a str,
    /// A comma or semicolon followed this lexeme
    boundary_after: bool,
}

fn lex(text: &str) -> Result<Vec<Lexeme<'_>>, TokenizerError> {
    if let Some(bad) = text.chars().find(|c| c.is_control() && !c.is_whitespace()) {
        return Err(TokenizerError::Unparseable {
            reason: format!("control character U+{:04X} in address", bad as u32),
        });
    }

    let mut lexemes: Vec<Lexeme<'_>> = Vec::new();
    for word in text.split_whitespace() {
        let segments: Vec<&str> = word.split(|c: char| c == ',' || c == ';').collect();
        let last = segments.len() - 1;
        for (idx, segment) in segments.into_iter().enumerate() {
            if !segment.is_empty() {
                lexemes.push(Lexeme {
                    text: segment,
                    boundary_after: false,
                });
            }
            if idx < last {
                if let Some(prev) = lexemes.last_mut() {
                    prev.boundary_after = true;
                }
            }
        }
    }
    Ok(lexemes)
}

impl AddressTokenizer for RuleTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<AddressToken>, TokenizerError> {
        let lexemes = lex(text)?;
        let mut tags: Vec<Option<AddressTag>> = vec![None; lexemes.len()];

        let end = tag_tail(&lexemes, &mut tags);
        tag_head(&lexemes[..end], &mut tags[..end]);

        let tokens: Vec<AddressToken> = lexemes
            .iter()
            .zip(tags)
            .map(|(lexeme, tag)| AddressToken::new(lexeme.text, tag.unwrap_or(AddressTag::PlaceName)))
            .collect();

        trace!(count = tokens.len(), "tokenized address text");
        Ok(tokens)
    }
}

/// Tag zip code and state at the end. Returns the index where the tail starts.
fn tag_tail(lexemes: &[Lexeme<'_>], tags: &mut [Option<AddressTag>]) -> usize {
    let mut end = lexemes.len();

    let has_zip = end > 0 && lexicon::is_zip_code(lexemes[end - 1].text);
    if has_zip {
        tags[end - 1] = Some(AddressTag::ZipCode);
        end -= 1;
    }

    // A state needs something in front of it; "WA" alone is just a word.
    if end < 2 {
        return end;
    }

    for words in (2..=MAX_STATE_WORDS.min(end - 1)).rev() {
        let start = end - words;
        let joined = lexemes[start..end]
            .iter()
            .map(|l| l.text)
            .collect::<Vec<_>>()
            .join(" ");
        if lexicon::is_state_name(&joined) {
            tags[start..end].fill(Some(AddressTag::StateName));
            return start;
        }
    }

    let last = lexemes[end - 1].text;
    let looks_like_street = !has_zip && lexicon::is_street_suffix(last);
    if (lexicon::is_state_code(last) || lexicon::is_state_name(last)) && !looks_like_street {
        tags[end - 1] = Some(AddressTag::StateName);
        end -= 1;
    }
    end
}

/// Tag the street line and unit designators at the front of the text.
/// Anything left untagged becomes part of the place name.
fn tag_head(lexemes: &[Lexeme<'_>], tags: &mut [Option<AddressTag>]) {
    let end = lexemes.len();
    let mut i = 0;

    if let Some(consumed) = tag_po_box(lexemes, tags) {
        i = consumed;
    } else {
        let has_number = end > 0 && lexicon::is_house_number(lexemes[0].text);
        if has_number {
            tags[0] = Some(AddressTag::AddressNumber);
            i = 1;
        }
        if has_number || first_segment_has_suffix(lexemes) {
            i = tag_street(lexemes, tags, i);
        }
    }

    while i < end {
        let text = lexemes[i].text;
        if lexicon::is_occupancy_type(text) || text == "#" {
            tags[i] = Some(AddressTag::OccupancyType);
            i += 1;
            if i < end {
                tags[i] = Some(AddressTag::OccupancyIdentifier);
                i += 1;
            }
        } else if text.starts_with('#') {
            tags[i] = Some(AddressTag::OccupancyIdentifier);
            i += 1;
        } else {
            break;
        }
    }
}

/// `PO Box 123`, `P.O. Box 123`. Returns the number of lexemes consumed.
fn tag_po_box(lexemes: &[Lexeme<'_>], tags: &mut [Option<AddressTag>]) -> Option<usize> {
    if lexemes.len() < 3 {
        return None;
    }
    if lexicon::fold(lexemes[0].text) != "po" || lexicon::fold(lexemes[1].text) != "box" {
        return None;
    }
    tags[0] = Some(AddressTag::UspsBoxType);
    tags[1] = Some(AddressTag::UspsBoxType);
    tags[2] = Some(AddressTag::UspsBoxId);
    Some(3)
}

fn first_segment_has_suffix(lexemes: &[Lexeme<'_>]) -> bool {
    for (idx, lexeme) in lexemes.iter().enumerate() {
        if idx > 0 && lexicon::is_street_suffix(lexeme.text) {
            return true;
        }
        if lexeme.boundary_after {
            break;
        }
    }
    false
}

/// Street name words up to a suffix, a segment boundary or a unit designator.
fn tag_street(lexemes: &[Lexeme<'_>], tags: &mut [Option<AddressTag>], start: usize) -> usize {
    let end = lexemes.len();
    let mut i = start;

    if i + 1 < end && lexicon::is_directional(lexemes[i].text) && !lexemes[i].boundary_after {
        tags[i] = Some(AddressTag::StreetNamePreDirectional);
        i += 1;
    }

    let mut named = 0;
    let mut closed_by_suffix = false;
    while i < end {
        let lexeme = lexemes[i];
        if named > 0 && lexicon::is_street_suffix(lexeme.text) {
            tags[i] = Some(AddressTag::StreetNamePostType);
            i += 1;
            closed_by_suffix = !lexeme.boundary_after;
            break;
        }
        if named > 0 && (lexicon::is_occupancy_type(lexeme.text) || lexeme.text.starts_with('#')) {
            break;
        }
        tags[i] = Some(AddressTag::StreetName);
        named += 1;
        i += 1;
        if lexeme.boundary_after {
            break;
        }
    }

    if closed_by_suffix && i < end && lexicon::is_directional(lexemes[i].text) {
        tags[i] = Some(AddressTag::StreetNamePostDirectional);
        i += 1;
    }
    i
}
