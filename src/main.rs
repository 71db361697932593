#[tokio::main]
async fn main() {
    if let Err(error) = aeos_lib::run().await {
        eprintln!("aeos: {error}");
        std::process::exit(1);
    }
}
