//! Review and delete bookings and inquiries.

use anyhow::{bail, Context as _, Result};
use dialoguer::Confirm;
use voyage_commerce::RecordId;

use super::{AdminArgs, AdminCommand};
use crate::context::Context;
use crate::output::truncate;

/// Run the admin command.
pub fn run(args: AdminArgs, ctx: &Context) -> Result<()> {
    match args.command {
        AdminCommand::Bookings => bookings(ctx),
        AdminCommand::Inquiries => inquiries(ctx),
        AdminCommand::DeleteBooking { id, yes } => {
            let id = parse_id(&id)?;
            let shop = ctx.storefront()?;
            let log = shop.bookings();
            let Some(booking) = log.get(id)? else {
                bail!("Booking #{} not found", id);
            };
            let summary = format!(
                "booking #{} for {} ({})",
                id,
                booking.guest_name(),
                ctx.money(booking.total)
            );
            if !confirm(ctx, &summary, yes)? {
                return Ok(());
            }
            log.delete(id)?;
            ctx.output.success(&format!("Deleted {}", summary));
            Ok(())
        }
        AdminCommand::DeleteInquiry { id, yes } => {
            let id = parse_id(&id)?;
            let shop = ctx.storefront()?;
            let log = shop.inquiries();
            let Some(inquiry) = log.get(id)? else {
                bail!("Inquiry #{} not found", id);
            };
            let summary = format!("inquiry #{} from {}", id, inquiry.name);
            if !confirm(ctx, &summary, yes)? {
                return Ok(());
            }
            log.delete(id)?;
            ctx.output.success(&format!("Deleted {}", summary));
            Ok(())
        }
    }
}

fn bookings(ctx: &Context) -> Result<()> {
    let shop = ctx.storefront()?;
    let bookings = shop.bookings().list()?;

    if ctx.output.is_json() {
        ctx.output.json(&bookings);
        return Ok(());
    }

    ctx.output.header(&format!("Bookings ({})", bookings.len()));
    if bookings.is_empty() {
        ctx.output.info("No bookings yet");
        return Ok(());
    }

    let widths = [15, 10, 20, 26, 6, 10];
    ctx.output.table_header(
        &["ID", "DATE", "GUEST", "EMAIL", "ITEMS", "TOTAL"],
        &widths,
    );
    for booking in &bookings {
        let id = format!("#{}", booking.id);
        let items = booking.items.len().to_string();
        let total = ctx.money(booking.total);
        ctx.output.table_row(
            &[
                &id,
                &booking.date,
                &truncate(&booking.guest_name(), 20),
                &truncate(&booking.customer.email, 26),
                &items,
                &total,
            ],
            &widths,
        );
    }
    Ok(())
}

fn inquiries(ctx: &Context) -> Result<()> {
    let shop = ctx.storefront()?;
    let inquiries = shop.inquiries().list()?;

    if ctx.output.is_json() {
        ctx.output.json(&inquiries);
        return Ok(());
    }

    ctx.output.header(&format!("Inquiries ({})", inquiries.len()));
    if inquiries.is_empty() {
        ctx.output.info("No inquiries yet");
        return Ok(());
    }

    for inquiry in &inquiries {
        ctx.output.list_item(&format!(
            "#{} {} <{}> on {}",
            inquiry.id,
            inquiry.name,
            inquiry.email,
            inquiry.date.format("%Y-%m-%d %H:%M UTC")
        ));
        if !inquiry.subject.is_empty() {
            ctx.output.kv("Subject", &inquiry.subject);
        }
        if !inquiry.phone.is_empty() {
            ctx.output.kv("Phone", &inquiry.phone);
        }
        ctx.output.kv("Message", &inquiry.message);
    }
    Ok(())
}

fn parse_id(raw: &str) -> Result<RecordId> {
    raw.parse::<RecordId>()
        .with_context(|| format!("Invalid record id '{}'", raw))
}

fn confirm(ctx: &Context, what: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }

    let confirmed = Confirm::new()
        .with_prompt(format!("Delete {}?", what))
        .default(false)
        .interact()?;

    if !confirmed {
        ctx.output.warn("Deletion cancelled");
    }
    Ok(confirmed)
}
