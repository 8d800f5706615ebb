#[tokio::main]
async fn main() -> anyhow::Result<()> {
    gloss_practice_backend::run().await
}
