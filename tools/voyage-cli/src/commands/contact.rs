//! Send an inquiry.

use anyhow::Result;
use voyage_commerce::contact::ContactForm;

use super::ContactArgs;
use crate::context::Context;

/// Run the contact command.
pub fn run(args: ContactArgs, ctx: &Context) -> Result<()> {
    let shop = ctx.storefront()?;

    let form = ContactForm {
        name: args.name,
        email: args.email,
        phone: args.phone,
        subject: args.subject,
        message: args.message,
    };
    let inquiry = shop.submit_inquiry(form)?;

    if ctx.output.is_json() {
        ctx.output.json(&inquiry);
        return Ok(());
    }

    ctx.output.success(&format!(
        "Thanks, {}. We'll get back to you soon.",
        inquiry.name
    ));
    ctx.output.kv("Reference", &format!("#{}", inquiry.id));
    Ok(())
}
