/*!
# Statements
*/

#[path = "statements/bookmark.rs"]
#[allow(non_snake_case)]
pub mod BOOKMARK;

#[path = "statements/call.rs"]
#[allow(non_snake_case)]
pub mod CALL;

#[path = "statements/goto.rs"]
#[allow(non_snake_case)]
pub mod GOTO;

#[path = "statements/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "statements/print.rs"]
#[allow(non_snake_case)]
pub mod PRINT;

#[path = "statements/store.rs"]
#[allow(non_snake_case)]
pub mod STORE;
