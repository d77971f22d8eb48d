crate::define_internal_fn!(
    //
    // Check if a field is assigned on an instance
    //
    // Malformed calls return 'false' when the runtime is configured to fall back
    //

    "hasField",

    (
        instance: InstanceType,
        field: StringType
    )

    -> BoolType,

    on_malformed_call: RuntimeValue::Bool(false)
);

fn run() -> Runner {
    Runner::new(|_, Args { instance, field }, _, _| {
        Ok(RuntimeValue::Bool(instance.read().has_field(&field)))
    })
}
