#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    sales_contract_server::run().await
}
