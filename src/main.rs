#[tokio::main]
async fn main() -> anyhow::Result<()> {
    reviews::start_server().await
}
