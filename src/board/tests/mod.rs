//! Unit tests for the board module.

mod card_tests;
