//! Quote-aware command tokenizer

use nom::{
    branch::alt,
    bytes::complete::{take_till, take_while1},
    character::complete::char,
    combinator::{map, opt},
    sequence::{pair, preceded},
    IResult,
};

/// A span delimited by the given quote character. An unterminated quote
/// consumes the rest of the line.
fn quoted(quote: char) -> impl Fn(&str) -> IResult<&str, String> {
    move |input| {
        map(
            preceded(
                char(quote),
                pair(take_till(move |c| c == quote), opt(char(quote))),
            ),
            |(body, _): (&str, _)| body.to_string(),
        )(input)
    }
}

fn bare(input: &str) -> IResult<&str, String> {
    map(take_while1(|c: char| !c.is_whitespace()), str::to_string)(input)
}

fn token(input: &str) -> IResult<&str, String> {
    alt((quoted('"'), quoted('\''), bare))(input)
}

/// Split a single command line into tokens. Quoted spans keep their inner
/// whitespace; empty tokens (e.g. from `""`) are dropped.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut input = line.trim_start();

    while !input.is_empty() {
        let Ok((rest, tok)) = token(input) else {
            break;
        };
        let tok = tok.trim();
        if !tok.is_empty() {
            tokens.push(tok.to_string());
        }
        input = rest.trim_start();
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(line: &str) -> Vec<String> {
        tokenize(line)
    }

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(toks("mv box1 -2 0 0"), ["mv", "box1", "-2", "0", "0"]);
        assert_eq!(toks("  c   1  1 1  "), ["c", "1", "1", "1"]);
    }

    #[test]
    fn empty_input_gives_no_tokens() {
        assert!(toks("").is_empty());
        assert!(toks("   \t ").is_empty());
    }

    #[test]
    fn double_quotes_keep_spaces() {
        assert_eq!(
            toks(r#"tx box1 "wood grain.jpg""#),
            ["tx", "box1", "wood grain.jpg"]
        );
    }

    #[test]
    fn single_quotes_work_too() {
        assert_eq!(toks("timeline s1 0 'c 1 1 1'"), ["timeline", "s1", "0", "c 1 1 1"]);
    }

    #[test]
    fn unterminated_quote_takes_rest_of_line() {
        assert_eq!(toks(r#"tx box1 "wood.jpg"#), ["tx", "box1", "wood.jpg"]);
        assert_eq!(toks(r#"a "b c d"#), ["a", "b c d"]);
    }

    #[test]
    fn empty_quoted_token_is_dropped() {
        assert_eq!(toks(r#"a "" b"#), ["a", "b"]);
    }
}
