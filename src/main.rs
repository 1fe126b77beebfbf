use azure_subnet_allocator::config::{DEFAULT_SUBNET_NAME, DEFAULT_VNET_NAME};
use azure_subnet_allocator::output::{print_vnet_config, to_payload_json};
use azure_subnet_allocator::plan_subnet_allocation;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();

    log::info!("#Start main()");

    let args: Vec<String> = std::env::args().collect();
    let resource_group = args
        .get(1)
        .cloned()
        .or_else(|| std::env::var("AZURE_RESOURCE_GROUP").ok())
        .expect("Usage: azure-subnet-allocator <resource_group> [vnet_name] [subnet_name]");
    let vnet_name = args
        .get(2)
        .cloned()
        .or_else(|| std::env::var("AZURE_VNET_NAME").ok());
    let subnet_name = args
        .get(3)
        .cloned()
        .or_else(|| std::env::var("AZURE_SUBNET_NAME").ok());
    let cache_file = std::env::var("VNET_CACHE_FILE").ok();

    let config = plan_subnet_allocation(
        &resource_group,
        vnet_name.as_deref(),
        subnet_name.as_deref(),
        cache_file.as_deref(),
    )?;

    let shown_vnet = vnet_name.as_deref().unwrap_or(DEFAULT_VNET_NAME);
    let shown_subnet = subnet_name.as_deref().unwrap_or(DEFAULT_SUBNET_NAME);
    log::info!("planned subnet '{shown_subnet}' in vnet '{shown_vnet}'");

    print_vnet_config(&config, Some(shown_subnet));
    println!("{}", to_payload_json(&config)?);

    Ok(())
}
