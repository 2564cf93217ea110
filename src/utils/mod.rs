//! Shared utilities: big-integer parsing, token-id validation, cross-chain lookup.

pub mod bigint;
pub mod crosschain;
pub mod validation;

pub use bigint::{count_elements, str_to_big_int};
pub use crosschain::{get_crosschain_data, CrossChainCollections, NetworkContractMap};
pub use validation::{erc1155_pattern_ready, is_valid_erc1155_format, split_erc1155_ids, TokenAmount};
