//! Show and change the cart.

use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use voyage_commerce::cart::{CartLine, CartLineRef, ItemType, Rental};
use voyage_commerce::{TourId, VehicleId};

use super::{CartArgs, CartCommand};
use crate::context::Context;
use crate::output::truncate;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let shop = ctx.storefront()?;
    let cart = shop.cart();

    match args.command {
        CartCommand::Show => return show(ctx),
        CartCommand::AddTour { id, travelers } => {
            let id = TourId::new(id);
            cart.add_tour_line(&id, travelers)?;
            let title = &shop.catalog().tour(&id)?.title;
            ctx.output
                .success(&format!("Added {} traveler(s) for {}", travelers, title));
        }
        CartCommand::AddVehicle {
            id,
            days,
            pickup,
            dropoff,
        } => {
            let mut rental = Rental::days(days);
            rental.pickup_date = pickup.as_deref().map(parse_date).transpose()?;
            rental.dropoff_date = dropoff.as_deref().map(parse_date).transpose()?;

            let id = VehicleId::new(id);
            cart.add_vehicle_line(&id, rental)?;
            let name = &shop.catalog().vehicle(&id)?.name;
            ctx.output
                .success(&format!("Added {} for {} day(s)", name, days));
        }
        CartCommand::Set {
            id,
            quantity,
            item_type,
        } => {
            let line = CartLineRef::new(id, item_type.parse::<ItemType>()?);
            if cart.set_quantity(&line, quantity)? {
                ctx.output.success(&format!("Updated {}", line));
            } else {
                ctx.output.warn(&format!("No {} in the cart", line));
            }
        }
        CartCommand::Remove { id, item_type } => {
            let line = CartLineRef::new(id, item_type.parse::<ItemType>()?);
            if cart.remove(&line)? {
                ctx.output.success(&format!("Removed {}", line));
            } else {
                ctx.output.warn(&format!("No {} in the cart", line));
            }
        }
        CartCommand::Clear => {
            cart.clear()?;
            ctx.output.success("Cart cleared");
        }
    }

    if ctx.output.is_json() {
        ctx.output.json(&cart.lines()?);
    }
    Ok(())
}

fn show(ctx: &Context) -> Result<()> {
    let shop = ctx.storefront()?;
    let cart = shop.cart().cart()?;
    let summary = cart.summary()?;

    if ctx.output.is_json() {
        ctx.output
            .json(&serde_json::json!({ "items": cart.lines(), "summary": summary }));
        return Ok(());
    }

    ctx.output.header("Your cart");
    if cart.is_empty() {
        ctx.output.info("Your cart is empty");
        return Ok(());
    }

    let widths = [8, 4, 30, 24, 10];
    ctx.output
        .table_header(&["TYPE", "ID", "ITEM", "DETAILS", "TOTAL"], &widths);
    for line in cart.lines() {
        let details = match line {
            CartLine::Tour(tour) => {
                format!("{} x {}", tour.quantity, ctx.money(tour.price))
            }
            CartLine::Vehicle(vehicle) => {
                let mut details =
                    format!("{} day(s) x {}", vehicle.days, ctx.money(vehicle.price_per_day));
                if let (Some(pickup), Some(dropoff)) = (vehicle.pickup_date, vehicle.dropoff_date) {
                    details = format!("{} ({} to {})", details, pickup, dropoff);
                }
                details
            }
        };
        let line_ref = line.line_ref();
        let total = ctx.money(line.line_total()?);
        ctx.output.table_row(
            &[
                line_ref.item_type().as_str(),
                line_ref.id(),
                &truncate(line.label(), 30),
                &details,
                &total,
            ],
            &widths,
        );
    }

    println!();
    ctx.output.kv("Items", &summary.item_count.to_string());
    ctx.output.kv("Subtotal", &ctx.money(summary.subtotal));
    ctx.output.kv("Tax (10%)", &ctx.money(summary.tax));
    ctx.output.kv("Total", &ctx.money(summary.total));
    Ok(())
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-06-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
        assert!(parse_date("06/01/2024").is_err());
    }
}
