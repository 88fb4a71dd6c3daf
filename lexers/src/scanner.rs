#![deny(warnings)]

/// Buffered lookahead over any iterator.
///
/// Items accepted since the last `extract`/`ignore` form the current lexeme.
/// The scanner keeps track of how many items were dropped before the lexeme
/// so callers can report positions.
pub struct Scanner<I: Iterator> where I::Item: Clone {
    src: I,
    buf: Vec<I::Item>, // starts at the first item of the current lexeme
    cursor: usize,     // items of buf accepted into the lexeme
    offset: usize,     // items consumed before the current lexeme
}

impl<I> Iterator for Scanner<I> where I: Iterator, I::Item: Clone {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.peek()?;
        self.cursor += 1;
        Some(item)
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone {
    pub fn new(source: I) -> Scanner<I> {
        Scanner{src: source, buf: Vec::new(), cursor: 0, offset: 0}
    }

    /// Position of the first item of the current lexeme in the source.
    pub fn offset(&self) -> usize { self.offset }

    // pull from the source until the buffer holds n items
    fn fill(&mut self, n: usize) -> bool {
        while self.buf.len() < n {
            match self.src.next() {
                Some(item) => self.buf.push(item),
                None => return false,
            }
        }
        true
    }

    pub fn peek(&mut self) -> Option<I::Item> {
        if self.fill(self.cursor + 1) {
            Some(self.buf[self.cursor].clone())
        } else {
            None
        }
    }

    pub fn lexeme(&self) -> &[I::Item] {
        &self.buf[..self.cursor]
    }

    pub fn accept_if<F>(&mut self, pred: F) -> Option<I::Item>
        where F: Fn(&I::Item) -> bool
    {
        let next = self.peek()?;
        if !pred(&next) {
            return None;
        }
        self.cursor += 1;
        Some(next)
    }

    // afterwards the next item (if any) no longer matches pred
    pub fn skip_matching<F>(&mut self, pred: F) -> bool
        where F: Fn(&I::Item) -> bool
    {
        let mut advanced = false;
        while self.accept_if(&pred).is_some() { advanced = true; }
        advanced
    }

    pub fn ignore(&mut self) {
        self.buf.drain(..self.cursor);
        self.offset += self.cursor;
        self.cursor = 0;
    }

    pub fn extract(&mut self) -> Vec<I::Item> {
        let lexeme = self.lexeme().to_vec();
        self.ignore();
        lexeme
    }
}

impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }
}
