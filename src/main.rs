#[tokio::main]
async fn main() {
    mediscan::run().await;
}
