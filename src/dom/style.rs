//! Inline `style` attribute parsing.
//!
//! Filings carry almost all of their formatting in inline styles
//! (`<font style="font-weight:bold">`, `<div style="page-break-after:always">`).
//! Only the handful of properties the classifiers look at are kept.

use cssparser::{Parser, ParserInput, Token};

use super::{Dom, NodeId};

/// Font weight as written in a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
    Weight(u16),
}

impl FontWeight {
    pub fn is_bold(self) -> bool {
        match self {
            FontWeight::Normal => false,
            FontWeight::Bold => true,
            FontWeight::Weight(w) => w >= 600,
        }
    }
}

/// The subset of an inline style the classifiers care about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    pub font_weight: Option<FontWeight>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    /// `page-break-before`/`page-break-after`/`break-*` set to a page break.
    pub page_break: bool,
    /// `display: none`.
    pub hidden: bool,
}

impl InlineStyle {
    /// Parse the contents of a `style` attribute.
    pub fn parse(style_attr: &str) -> Self {
        let mut input = ParserInput::new(style_attr);
        let mut parser = Parser::new(&mut input);
        parse_declaration_block(&mut parser)
    }

    /// Parse the `style` attribute of a node, if it has one.
    pub fn of(dom: &Dom, id: NodeId) -> Self {
        dom.get_attr(id, "style").map(Self::parse).unwrap_or_default()
    }

    pub fn is_bold(&self) -> bool {
        self.font_weight.is_some_and(FontWeight::is_bold)
    }
}

fn parse_declaration_block<'i>(input: &mut Parser<'i, '_>) -> InlineStyle {
    let mut style = InlineStyle::default();

    loop {
        input.skip_whitespace();
        if input.is_exhausted() {
            break;
        }

        let result: Result<(), cssparser::ParseError<'i, ()>> = input.try_parse(|i| {
            let property = match i.next()? {
                Token::Ident(name) => name.to_ascii_lowercase(),
                _ => return Err(i.new_custom_error(())),
            };

            i.skip_whitespace();
            match i.next()? {
                Token::Colon => {}
                _ => return Err(i.new_custom_error(())),
            }

            let mut values: Vec<Token> = Vec::new();
            loop {
                match i.next() {
                    Ok(Token::Semicolon) | Err(_) => break,
                    Ok(Token::WhiteSpace(_)) => {}
                    Ok(t) => values.push(t.clone()),
                }
            }

            apply_property(&mut style, &property, &values);
            Ok(())
        });

        if result.is_err() {
            // Skip to the next declaration.
            while let Ok(token) = input.next() {
                if matches!(token, Token::Semicolon) {
                    break;
                }
            }
        }
    }

    style
}

fn apply_property(style: &mut InlineStyle, property: &str, values: &[Token]) {
    match property {
        "font-weight" => style.font_weight = parse_font_weight(values),
        "font-style" => {
            if let Some(ident) = first_ident(values) {
                style.italic = Some(matches!(ident.as_str(), "italic" | "oblique"));
            }
        }
        "text-decoration" | "text-decoration-line" => {
            if values.iter().any(|t| ident_eq(t, "underline")) {
                style.underline = Some(true);
            } else if values.iter().any(|t| ident_eq(t, "none")) {
                style.underline = Some(false);
            }
        }
        "page-break-before" | "page-break-after" | "break-before" | "break-after" => {
            if values
                .iter()
                .any(|t| ident_eq(t, "always") || ident_eq(t, "page"))
            {
                style.page_break = true;
            }
        }
        "display" => {
            if values.iter().any(|t| ident_eq(t, "none")) {
                style.hidden = true;
            }
        }
        _ => {}
    }
}

fn first_ident(values: &[Token]) -> Option<String> {
    values.iter().find_map(|t| match t {
        Token::Ident(name) => Some(name.to_ascii_lowercase()),
        _ => None,
    })
}

fn ident_eq(token: &Token, expected: &str) -> bool {
    matches!(token, Token::Ident(name) if name.eq_ignore_ascii_case(expected))
}

fn parse_font_weight(values: &[Token]) -> Option<FontWeight> {
    for token in values {
        match token {
            Token::Ident(name) => match name.to_ascii_lowercase().as_str() {
                "normal" | "lighter" => return Some(FontWeight::Normal),
                "bold" | "bolder" => return Some(FontWeight::Bold),
                _ => continue,
            },
            Token::Number {
                int_value: Some(weight),
                ..
            } => return Some(FontWeight::Weight((*weight).clamp(0, 1000) as u16)),
            _ => continue,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bold_keyword_and_number() {
        assert!(InlineStyle::parse("font-weight: bold").is_bold());
        assert!(InlineStyle::parse("font-weight:700;").is_bold());
        assert!(!InlineStyle::parse("font-weight: 400").is_bold());
        assert!(!InlineStyle::parse("color: red").is_bold());
    }

    #[test]
    fn test_parse_italic_and_underline() {
        let style = InlineStyle::parse("font-style:italic; text-decoration: underline");
        assert_eq!(style.italic, Some(true));
        assert_eq!(style.underline, Some(true));

        let style = InlineStyle::parse("font-style: normal; text-decoration: none");
        assert_eq!(style.italic, Some(false));
        assert_eq!(style.underline, Some(false));
    }

    #[test]
    fn test_parse_page_break() {
        assert!(InlineStyle::parse("page-break-after: always").page_break);
        assert!(InlineStyle::parse("margin:0; break-before: page").page_break);
        assert!(!InlineStyle::parse("page-break-inside: avoid").page_break);
    }

    #[test]
    fn test_bad_declaration_is_skipped() {
        let style = InlineStyle::parse("}}}; display: none; font-weight: bold");
        assert!(style.hidden);
        assert!(style.is_bold());
    }

    #[test]
    fn test_case_insensitive_properties() {
        let style = InlineStyle::parse("FONT-WEIGHT: BOLD; Display: None");
        assert!(style.is_bold());
        assert!(style.hidden);
    }
}
