use std::time::{SystemTime, UNIX_EPOCH};

crate::define_internal_fn!(
    //
    // Get the number of seconds elapsed since the Unix epoch
    //

    "clock",

    ()

    -> FloatType
);

fn run() -> Runner {
    Runner::new(|at, Args {}, _, ctx| {
        let elapsed = SystemTime::now().duration_since(UNIX_EPOCH).map_err(|err| {
            ctx.error(
                at,
                format!("system clock is set before the Unix epoch: {err}"),
            )
        })?;

        Ok(RuntimeValue::Float(elapsed.as_secs_f64()))
    })
}
