//! Annotation tokenizer and flag parser.

use crate::error::TagError;
use crate::flag::{Flag, FlagKind};
use crate::flags::ParsedFlags;

/// Parse one field annotation.
///
/// The first token is the override name unless it contains a colon, in which
/// case it is read as a flag. An empty first token keeps the declared name.
///
/// # Errors
///
/// Returns a [`TagError`] for the first token that does not parse. No partial
/// result is produced.
pub fn parse(annotation: &str) -> Result<ParsedFlags, TagError> {
    let mut tokens = annotation.split(',').map(str::trim).enumerate();
    let mut override_name = None;
    let mut flags: Vec<Flag> = Vec::new();

    if let Some((_, first)) = tokens.next() {
        if first.contains(':') {
            push_unique(&mut flags, parse_flag(first)?)?;
        } else if !first.is_empty() {
            override_name = Some(identifier("override name", first)?);
        }
    }

    for (position, token) in tokens {
        if token.is_empty() {
            return Err(TagError::EmptyToken { position });
        }
        push_unique(&mut flags, parse_flag(token)?)?;
    }

    Ok(ParsedFlags::from_parts(override_name, flags))
}

fn push_unique(flags: &mut Vec<Flag>, flag: Flag) -> Result<(), TagError> {
    let kind = flag.kind();
    if flags.iter().any(|existing| existing.kind() == kind) {
        return Err(TagError::DuplicateFlag(kind.as_str()));
    }
    flags.push(flag);
    Ok(())
}

fn parse_flag(token: &str) -> Result<Flag, TagError> {
    let Some((key, value)) = token.split_once(':') else {
        let kind =
            FlagKind::from_name(token).ok_or_else(|| TagError::UnknownFlag(token.to_string()))?;
        return Flag::bare(kind).ok_or(TagError::MissingValue {
            flag: kind.as_str(),
        });
    };

    let kind = FlagKind::from_name(key).ok_or_else(|| TagError::UnknownFlag(token.to_string()))?;
    match kind {
        FlagKind::Default => Ok(Flag::Default(value.to_string())),
        FlagKind::ElementType => value_identifier(kind, value).map(Flag::ElementType),
        FlagKind::Fold => value_identifier(kind, value).map(Flag::Fold),
        FlagKind::Enum => parse_enum(value).map(Flag::Enum),
        _ => Err(TagError::UnexpectedValue {
            flag: kind.as_str(),
            value: value.to_string(),
        }),
    }
}

fn value_identifier(kind: FlagKind, value: &str) -> Result<String, TagError> {
    if value.is_empty() {
        return Err(TagError::MissingValue {
            flag: kind.as_str(),
        });
    }
    identifier(kind.as_str(), value)
}

fn identifier(role: &'static str, value: &str) -> Result<String, TagError> {
    let mut chars = value.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid {
        Ok(value.to_string())
    } else {
        Err(TagError::InvalidIdentifier {
            role,
            value: value.to_string(),
        })
    }
}

/// `enum:/a/b/c`: the first character is the separator for the rest.
fn parse_enum(raw: &str) -> Result<Vec<String>, TagError> {
    let malformed = |reason| TagError::MalformedEnum {
        raw: raw.to_string(),
        reason,
    };

    let mut chars = raw.chars();
    let separator = chars.next().ok_or_else(|| malformed("missing separator"))?;
    if separator.is_alphanumeric() {
        return Err(malformed("separator must not be alphanumeric"));
    }

    let rest = chars.as_str();
    if rest.is_empty() {
        return Err(malformed("no values"));
    }

    let mut values: Vec<String> = Vec::new();
    for value in rest.split(separator) {
        if value.is_empty() {
            return Err(malformed("empty value"));
        }
        if values.iter().any(|existing| existing == value) {
            return Err(malformed("duplicate value"));
        }
        values.push(value.to_string());
    }
    Ok(values)
}
