fn main() {
    multiversx_sc_meta_lib::cli_main::<settlement_ledger::AbiProvider>();
}
