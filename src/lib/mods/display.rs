// This file is part of the inicore package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.
//! Quoting for option names and values embedded in messages.
//!
//! Use [`Quotable::quote`] when an option name, value or path appears in an
//! error or informational message. It wraps quotes around the text and adds
//! the escapes needed to make the result copy/paste-able into a shell.
//!
//! # Examples
//! ```rust
//! use inicore::display::Quotable;
//!
//! println!("unknown option {}", "memory_limit".quote());
//! ```

pub use os_display::{Quotable, Quoted};
