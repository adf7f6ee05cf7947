//! Browse rental vehicles.

use anyhow::Result;
use voyage_commerce::catalog::{Vehicle, VehicleType};
use voyage_commerce::search::{VehicleFilter, VEHICLE_PRICE_CEILING};
use voyage_commerce::{Money, VehicleId};

use super::{VehiclesArgs, VehiclesCommand};
use crate::context::Context;
use crate::output::{format_rating, truncate};

const WIDTHS: [usize; 6] = [4, 24, 10, 10, 6, 14];

/// Run the vehicles command.
pub fn run(args: VehiclesArgs, ctx: &Context) -> Result<()> {
    match args.command {
        VehiclesCommand::List {
            vehicle_type,
            min_price,
            max_price,
            search,
        } => {
            let mut filter = VehicleFilter::new().with_price_range(
                Money::new(min_price.unwrap_or(0)),
                max_price.map_or(VEHICLE_PRICE_CEILING, Money::new),
            );
            if let Some(vehicle_type) = vehicle_type {
                filter = filter.with_type(vehicle_type.parse::<VehicleType>()?);
            }
            if let Some(search) = search {
                filter = filter.with_text(search);
            }
            list(&filter, ctx)
        }
        VehiclesCommand::Show { id } => show(&VehicleId::new(id), ctx),
    }
}

fn list(filter: &VehicleFilter, ctx: &Context) -> Result<()> {
    let shop = ctx.storefront()?;
    let vehicles = shop.catalog().list_vehicles(filter);

    if ctx.output.is_json() {
        ctx.output.json(&vehicles);
        return Ok(());
    }

    ctx.output.header(&format!("{} vehicle(s)", vehicles.len()));
    if vehicles.is_empty() {
        ctx.output.info("No vehicles match these filters");
        return Ok(());
    }

    print_table(&vehicles, ctx);
    Ok(())
}

fn print_table(vehicles: &[&Vehicle], ctx: &Context) {
    ctx.output
        .table_header(&["ID", "NAME", "TYPE", "PER DAY", "SEATS", "RATING"], &WIDTHS);
    for vehicle in vehicles {
        let price = ctx.money(vehicle.price_per_day);
        let seats = vehicle.capacity.to_string();
        let rating = format_rating(vehicle.rating, vehicle.reviews);
        ctx.output.table_row(
            &[
                vehicle.id.as_str(),
                &truncate(&vehicle.name, 24),
                vehicle.vehicle_type.as_str(),
                &price,
                &seats,
                &rating,
            ],
            &WIDTHS,
        );
    }
}

fn show(id: &VehicleId, ctx: &Context) -> Result<()> {
    let shop = ctx.storefront()?;
    let catalog = shop.catalog();
    let vehicle = catalog.vehicle(id)?;
    let similar = catalog.similar_vehicles(id);

    if ctx.output.is_json() {
        ctx.output
            .json(&serde_json::json!({ "vehicle": vehicle, "similar": similar }));
        return Ok(());
    }

    ctx.output.header(&vehicle.name);
    ctx.output.kv("ID", vehicle.id.as_str());
    ctx.output.kv("Type", vehicle.vehicle_type.as_str());
    ctx.output
        .kv("Price", &format!("{} per day", ctx.money(vehicle.price_per_day)));
    ctx.output.kv("Seats", &vehicle.capacity.to_string());
    ctx.output.kv("Transmission", vehicle.transmission.as_str());
    ctx.output.kv("Fuel", vehicle.fuel_type.as_str());
    ctx.output
        .kv("Rating", &format_rating(vehicle.rating, vehicle.reviews));

    ctx.output.header("Features");
    for feature in &vehicle.features {
        ctx.output.list_item(feature);
    }

    if !similar.is_empty() {
        ctx.output.header("Similar vehicles");
        print_table(&similar, ctx);
    }

    Ok(())
}
