#[tokio::main]
async fn main() {
    cocoa_ranks::run().await;
}
