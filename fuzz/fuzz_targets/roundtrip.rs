use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let archive = huffarc::compress(data, "bin").expect("compress");
            let (_, restored) = huffarc::decompress(&archive).expect("decompress");
            assert_eq!(restored, data);
        });
    }
}
