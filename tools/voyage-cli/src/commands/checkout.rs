//! Book everything in the cart.

use anyhow::Result;
use voyage_commerce::checkout::{CheckoutFlow, CheckoutStep, CustomerDetails};

use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let shop = ctx.storefront()?;
    let ledger = shop.cart();
    let bookings = shop.bookings();
    let total_steps = CheckoutStep::Confirmation.number();

    let customer = CustomerDetails {
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
        phone: args.phone,
        address: args.address,
        city: args.city,
        zip_code: args.zip_code,
        country: args.country,
    };

    let mut flow = CheckoutFlow::new();
    announce(ctx, flow.step(), total_steps);

    let cart = ledger.cart()?;
    let step = flow.proceed(&cart)?;
    announce(ctx, step, total_steps);
    ctx.output
        .debug(&format!("Checking out {} line(s)", cart.lines().len()));

    let booking = flow.submit(&ledger, &bookings, customer)?;
    announce(ctx, CheckoutStep::Confirmation, total_steps);

    if ctx.output.is_json() {
        ctx.output.json(booking);
        return Ok(());
    }

    ctx.output.success(&format!(
        "Thank you, {}! Your booking is confirmed.",
        booking.guest_name()
    ));
    ctx.output.kv("Booking", &format!("#{}", booking.id));
    ctx.output.kv("Date", &booking.date);
    ctx.output.kv("Items", &booking.item_count().to_string());
    ctx.output.kv("Total", &ctx.money(booking.total));
    ctx.output.info(&format!(
        "A confirmation will be sent to {}",
        booking.customer.email
    ));
    Ok(())
}

fn announce(ctx: &Context, step: CheckoutStep, total: u8) {
    ctx.output.step(step.number(), total, step.display_name());
}
