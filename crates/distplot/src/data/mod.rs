pub mod keybindings_data;
pub mod storage;
