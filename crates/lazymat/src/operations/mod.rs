//! Matrix operations.
//!
//! ```text
//! Lazy (build a view, compute on read):
//!     add, sub, mul, div  and  + - * /
//!
//! Eager (write into a leaf matrix):
//!     Matrix::assign, assign_add/sub/mul/div  and  += -= *= /=
//!     Matrix::scalar_add/sub/mul/div
//!     product::dot
//! ```

mod assign;
mod binary;
mod elementwise;

pub use binary::{
    AddExpr, AddOp, BinaryExpr, BinaryOp, DivExpr, DivOp, MulExpr, MulOp, SubExpr, SubOp, add,
    div, mul, sub,
};
