mod all;
mod calculator;
mod contact;
mod footer;
mod header;
mod log;
mod nav;

use self::log::log;
use super::*;
use calculator::calculator;
use contact::contact;
use footer::footer;
use header::header;
use nav::nav;

pub use all::all as render;
