pub use ops::{OpErr, Operator};
pub use stack::{EmptyStack, ValueStack};
pub use tokenizer::{RpnToken, RpnTokenizer};

pub mod ops;
pub mod stack;
pub mod tokenizer;

pub use self::rpneval::calculate;
pub use self::rpneval::{ErrorKind, EvalErr, RpnEvaluator, TokenErr};

mod rpneval;
