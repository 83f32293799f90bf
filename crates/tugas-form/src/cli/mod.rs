/*
[INPUT]:  Parsed CLI subcommand arguments
[OUTPUT]: Non-TUI front ends for the task form
[POS]:    CLI module registry
[UPDATE]: When adding a new subcommand
*/

pub mod add;
pub mod init;
pub mod prompt;
