use crate::scanner::Scanner;

/// What a single input character means to the integer calculator.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CharClass {
    Digit,
    Operator,
    OParen,
    CParen,
    Whitespace,
    Invalid,
}

pub fn classify(c: char) -> CharClass {
    match c {
        '0'..='9' => CharClass::Digit,
        '+' | '-' | '*' | '/' | '%' | '^' => CharClass::Operator,
        '(' => CharClass::OParen,
        ')' => CharClass::CParen,
        ' ' | '\t' => CharClass::Whitespace,
        _ => CharClass::Invalid,
    }
}

/// Digit runs are kept as text, the caller decides on the integer width.
/// Whitespace only separates tokens and is never emitted.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum CalcToken {
    Digits(String),
    Op(char),
    OParen,
    CParen,
    Invalid(char),
}

/// Yields tokens paired with the character offset where they start.
pub struct CalcTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item=char>> CalcTokenizer<I> {
    pub fn new(source: I) -> Self {
        CalcTokenizer{src: Scanner::new(source)}
    }

    fn get_token(&mut self) -> Option<(usize, CalcToken)> {
        loop {
            let pos = self.src.offset();
            let c = self.src.next()?;
            let token = match classify(c) {
                CharClass::Whitespace => {
                    self.src.ignore();
                    continue;
                }
                CharClass::Digit => {
                    self.src.skip_matching(|c| classify(*c) == CharClass::Digit);
                    return Some((pos, CalcToken::Digits(self.src.extract_string())));
                }
                CharClass::Operator => CalcToken::Op(c),
                CharClass::OParen => CalcToken::OParen,
                CharClass::CParen => CalcToken::CParen,
                CharClass::Invalid => CalcToken::Invalid(c),
            };
            self.src.ignore();
            return Some((pos, token));
        }
    }
}

impl<'a> CalcTokenizer<std::str::Chars<'a>> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(source: &'a str) -> Self {
        CalcTokenizer::new(source.chars())
    }
}

impl<I: Iterator<Item=char>> Iterator for CalcTokenizer<I> {
    type Item = (usize, CalcToken);
    fn next(&mut self) -> Option<Self::Item> {
        self.get_token()
    }
}

///////////////////////////////////////////////////////////////////////////////
