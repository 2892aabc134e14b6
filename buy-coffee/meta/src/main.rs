fn main() {
    multiversx_sc_meta_lib::cli_main::<buy_coffee::AbiProvider>();
}
