/*  Passgen - a password generator form
    Copyright (C) 2019 Joakim Lundborg, Alexander Kjäll

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

/// Character classes and the random sampling that turns them into a password.
pub mod password_generator;

/// The state of the generator form and the actions a user can take on it.
pub mod form;

/// Toast notifications that report the outcome of every action.
pub mod notification;

/// Where copied passwords end up.
pub mod clipboard;

/// Reading user settings from `settings.toml` and the environment.
pub mod config;

pub mod error;

pub use error::{Error, Result};

#[cfg(test)]
#[path = "tests/test_helpers.rs"]
pub mod test_helpers;
