//! Browse tours.

use anyhow::Result;
use voyage_commerce::catalog::TourCategory;
use voyage_commerce::search::{TourFilter, TourSort, TOUR_PRICE_CEILING};
use voyage_commerce::{Money, TourId};

use super::{ToursArgs, ToursCommand};
use crate::context::Context;
use crate::output::{format_rating, truncate};

/// Run the tours command.
pub fn run(args: ToursArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ToursCommand::List {
            category,
            min_price,
            max_price,
            search,
            sort,
        } => {
            let mut filter = TourFilter::new()
                .with_price_range(
                    Money::new(min_price.unwrap_or(0)),
                    max_price.map_or(TOUR_PRICE_CEILING, Money::new),
                )
                .with_sort(sort.parse::<TourSort>()?);
            if let Some(category) = category {
                filter = filter.with_category(category.parse::<TourCategory>()?);
            }
            if let Some(search) = search {
                filter = filter.with_text(search);
            }
            list(&filter, ctx)
        }
        ToursCommand::Show { id } => show(&TourId::new(id), ctx),
    }
}

fn list(filter: &TourFilter, ctx: &Context) -> Result<()> {
    let shop = ctx.storefront()?;
    let tours = shop.catalog().list_tours(filter);

    if ctx.output.is_json() {
        ctx.output.json(&tours);
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} tour(s), sorted by {}",
        tours.len(),
        filter.sort.display_name()
    ));

    if tours.is_empty() {
        ctx.output.info("No tours match these filters");
        return Ok(());
    }

    let widths = [3, 30, 10, 20, 8, 14];
    ctx.output
        .table_header(&["ID", "TITLE", "CATEGORY", "LOCATION", "PRICE", "RATING"], &widths);
    for tour in tours {
        let price = ctx.money(tour.price);
        let rating = format_rating(tour.rating, tour.reviews);
        ctx.output.table_row(
            &[
                tour.id.as_str(),
                &truncate(&tour.title, 30),
                tour.category.as_str(),
                &truncate(&tour.location, 20),
                &price,
                &rating,
            ],
            &widths,
        );
    }

    Ok(())
}

fn show(id: &TourId, ctx: &Context) -> Result<()> {
    let shop = ctx.storefront()?;
    let catalog = shop.catalog();
    let tour = catalog.tour(id)?;
    let reviews = catalog.reviews_for(id);

    if ctx.output.is_json() {
        ctx.output
            .json(&serde_json::json!({ "tour": tour, "reviews": reviews }));
        return Ok(());
    }

    ctx.output.header(&tour.title);
    ctx.output.kv("ID", tour.id.as_str());
    ctx.output.kv("Category", tour.category.as_str());
    ctx.output.kv("Location", &tour.location);
    ctx.output.kv("Duration", &tour.duration);
    ctx.output.kv("Group size", &tour.group_size);
    ctx.output.kv("Difficulty", tour.difficulty.as_str());
    ctx.output
        .kv("Price", &format!("{} per person", ctx.money(tour.price)));
    ctx.output
        .kv("Rating", &format_rating(tour.rating, tour.reviews));

    println!("\n  {}", tour.description);

    ctx.output.header("Highlights");
    for highlight in &tour.highlights {
        ctx.output.list_item(highlight);
    }

    if !reviews.is_empty() {
        ctx.output.header("Reviews");
        for review in reviews {
            ctx.output.list_item(&format!(
                "{} ({}/5, {}): {}",
                review.name,
                review.rating,
                review.date.format("%b %-d, %Y"),
                review.text
            ));
        }
    }

    Ok(())
}
