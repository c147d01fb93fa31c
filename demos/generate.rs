use pixelgate::{GatewayClient, GatewayConfig, GenerateImageRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_result = dotenv::dotenv();
    pixelgate::logger::init()?;
    match dotenv_result {
        Ok(_) => log::info!("✅ .env file loaded"),
        Err(_) => log::warn!("⚠️  No .env file found"),
    }

    let client = GatewayClient::new(GatewayConfig::from_env());

    let request = GenerateImageRequest {
        prompt: "a lighthouse on a rocky cliff at dusk, waves crashing below".to_string(),
        style: Some("cinematic".to_string()),
        aspect_ratio: Some("16:9".to_string()),
        quality: Some("high".to_string()),
        seed: None,
        negative_prompt: None,
    };

    let result = client.image().generate(request).await?;
    println!("{}", result.image_url);

    Ok(())
}
