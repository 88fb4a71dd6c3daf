mod scanner;
mod calc_tokenizer;

pub use scanner::Scanner;
pub use calc_tokenizer::{classify, CalcToken, CalcTokenizer, CharClass};
