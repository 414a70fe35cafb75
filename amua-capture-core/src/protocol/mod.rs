pub mod hexdump;
pub mod packet;
