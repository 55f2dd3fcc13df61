use cucumber_tests::features::world::EnrollWorld;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use cucumber::{given, then, when};
use otp_enroll_core::{
    GeneratorConfig, OutputKind, SetupError, SetupRequest, TotpSetupGenerator, PNG_DATA_URI_PREFIX,
};

fn png_width(data_uri: &str) -> u32 {
    let png = STANDARD
        .decode(data_uri.trim_start_matches(PNG_DATA_URI_PREFIX))
        .expect("QR image is not valid base64");
    u32::from_be_bytes([png[16], png[17], png[18], png[19]])
}

fn generate_image(world: &mut EnrollWorld, issuer: &str, account: &str, secret: &str, pixels: u32) {
    let result = world.generator.generate_base64(issuer, account, secret, pixels);
    world.record(result);
}

// ==================== BACKGROUND ====================

#[given(expr = "a setup generator with default configuration")]
async fn given_default_generator(world: &mut EnrollWorld) {
    world.generator = TotpSetupGenerator::new();
}

#[given(expr = "a setup generator that URL-encodes the issuer")]
async fn given_encoding_generator(world: &mut EnrollWorld) {
    let config = GeneratorConfig { encode_issuer: true, ..Default::default() };
    world.generator = TotpSetupGenerator::with_config(config);
}

// ==================== GENERATION ====================

#[when(expr = "I generate a URL setup for issuer {string}, account {string} and secret {string}")]
async fn when_generate_url(world: &mut EnrollWorld, issuer: String, account: String, secret: String) {
    let result = world.generator.generate_url(&issuer, &account, &secret);
    world.record(result);
}

#[when(
    expr = "I generate an image setup for issuer {string}, account {string} and secret {string} at {int} pixels per module"
)]
async fn when_generate_image(
    world: &mut EnrollWorld,
    issuer: String,
    account: String,
    secret: String,
    pixels: u32,
) {
    generate_image(world, &issuer, &account, &secret, pixels);
}

#[when(
    expr = "I generate another image setup for issuer {string}, account {string} and secret {string} at {int} pixels per module"
)]
async fn when_generate_another_image(
    world: &mut EnrollWorld,
    issuer: String,
    account: String,
    secret: String,
    pixels: u32,
) {
    generate_image(world, &issuer, &account, &secret, pixels);
}

#[when(expr = "I generate a setup without the {string} field")]
async fn when_generate_without(world: &mut EnrollWorld, field: String) {
    let mut request = SetupRequest::new()
        .with_issuer("Acme")
        .with_account_identity("bob")
        .with_account_secret_key("SECRET");

    match field.as_str() {
        "issuer" => request.issuer = None,
        "account_identity" => request.account_identity = None,
        "account_secret_key" => request.account_secret_key = None,
        other => panic!("Unknown field {}", other),
    }

    let result = world.generator.generate(&request, OutputKind::Image);
    world.record(result);
}

// ==================== OUTCOMES ====================

#[then(expr = "the setup succeeds")]
async fn then_setup_succeeds(world: &mut EnrollWorld) {
    assert!(world.last_error.is_none(), "Unexpected error: {:?}", world.last_error);
    assert!(world.last_setup.is_some());
}

#[then(expr = "the setup fails with an invalid argument error for {string}")]
async fn then_invalid_argument(world: &mut EnrollWorld, field: String) {
    assert!(world.last_setup.is_none());
    match &world.last_error {
        Some(SetupError::InvalidArgument(name)) => assert_eq!(*name, field.as_str()),
        other => panic!("Expected InvalidArgument({}), got {:?}", field, other),
    }
}

#[then(expr = "the provisioning URL is {string}")]
async fn then_url_is(world: &mut EnrollWorld, expected: String) {
    assert_eq!(world.setup().qr_code_image_content(), Some(expected.as_str()));
}

#[then(expr = "the manual setup key is {string}")]
async fn then_manual_key_is(world: &mut EnrollWorld, expected: String) {
    assert_eq!(world.setup().manual_setup_key(), expected);
}

#[then(expr = "no QR image is returned")]
async fn then_no_image(world: &mut EnrollWorld) {
    assert!(world.setup().qr_code_image_base64().is_none());
}

#[then(expr = "no provisioning URL is returned")]
async fn then_no_url(world: &mut EnrollWorld) {
    assert!(world.setup().qr_code_image_content().is_none());
}

#[then(expr = "the QR image starts with {string}")]
async fn then_image_prefix(world: &mut EnrollWorld, prefix: String) {
    let image = world.setup().qr_code_image_base64().expect("No QR image");
    assert!(image.starts_with(&prefix));
}

#[then(expr = "the QR image decodes to a PNG")]
async fn then_image_is_png(world: &mut EnrollWorld) {
    let image = world.setup().qr_code_image_base64().expect("No QR image");
    let png = STANDARD.decode(image.trim_start_matches(PNG_DATA_URI_PREFIX)).unwrap();
    assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
}

#[then(expr = "the second image is {int} times as wide as the first")]
async fn then_image_scaled(world: &mut EnrollWorld, factor: u32) {
    let first = world.previous_setup.as_ref().expect("No first setup");
    let second = world.setup();

    let first_width = png_width(first.qr_code_image_base64().expect("No first image"));
    let second_width = png_width(second.qr_code_image_base64().expect("No second image"));
    assert_eq!(second_width, first_width * factor);
}

#[then(expr = "both setups share the manual setup key")]
async fn then_same_manual_key(world: &mut EnrollWorld) {
    let first = world.previous_setup.as_ref().expect("No first setup");
    assert_eq!(first.manual_setup_key(), world.setup().manual_setup_key());
}
