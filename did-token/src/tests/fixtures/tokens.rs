/// A token minted by the identity service for [`FIXTURE_CLIENT_ID`]. It expires
/// in the year 2324.
pub const FIXTURE_TOKEN: &str = "WyIweGFhNTBiZTcwNzI5Y2E3MDViYTdjOGQwMDE4NWM2ZjJkYTQ3OWQwZmNkZTUzMTFjYTRjZTViMWJhNzE1YzhhNzIxYzVmMTk0ODQzNGY5NmZmNTc3ZDdiMmI2YWQ4MmQzZGQ1YTI0NTdmZTY5OThiMTM3ZWQ5YmMwOGQzNmU1NDljMWIiLCJ7XCJpYXRcIjoxNTg2NzY0MjcwLFwiZXh0XCI6MTExNzM1Mjg1MDAsXCJpc3NcIjpcImRpZDpldGhyOjB4NEI3M0M1ODM3MEFFZmNFZjg2QTYwMjFhZkNEZTU2NzM1MTEzNzZCMlwiLFwic3ViXCI6XCJOanJBNTNTY1E4SVY4ME5Kbng0dDNTaGk5LWtGZkY1cWF2RDJWcjBkMWRjPVwiLFwiYXVkXCI6XCJkaWQ6bWFnaWM6NzMxODQ4Y2MtMDg0ZS00MWZmLWJiZGYtN2YxMDM4MTdlYTZiXCIsXCJuYmZcIjoxNTg2NzY0MjcwLFwidGlkXCI6XCJlYmNjODgwYS1mZmM5LTQzNzUtODRhZS0xNTRjY2Q1Yzc0NmRcIixcImFkZFwiOlwiMHg4NGQ2ODM5MjY4YTFhZjkxMTFmZGVjY2QzOTZmMzAzODA1ZGNhMmJjMDM0NTBiN2ViMTE2ZTJmNWZjOGM1YTcyMmQxZmI5YWYyMzNhYTczYzVjMTcwODM5Y2U1YWQ4MTQxYjliNDY0MzM4MDk4MmRhNGJmYmIwYjExMjg0OTg4ZjFiXCJ9Il0=";

pub const FIXTURE_CLIENT_ID: &str = "did:magic:731848cc-084e-41ff-bbdf-7f103817ea6b";

pub const FIXTURE_ISSUER: &str = "did:ethr:0x4B73C58370AEfcEf86A6021afCDe5673511376B2";

pub const FIXTURE_PROOF: &str = "0xaa50be70729ca705ba7c8d00185c6f2da479d0fcde5311ca4ce5b1ba715c8a721c5f1948434f96ff577d7b2b6ad82d3dd5a2457fe6998b137ed9bc08d36e549c1b";

/// The claim exactly as it appears inside [`FIXTURE_TOKEN`]
pub const FIXTURE_CLAIM_JSON: &str = r#"{"iat":1586764270,"ext":11173528500,"iss":"did:ethr:0x4B73C58370AEfcEf86A6021afCDe5673511376B2","sub":"NjrA53ScQ8IV80NJnx4t3Shi9-kFfF5qavD2Vr0d1dc=","aud":"did:magic:731848cc-084e-41ff-bbdf-7f103817ea6b","nbf":1586764270,"tid":"ebcc880a-ffc9-4375-84ae-154ccd5c746d","add":"0x84d6839268a1af9111fdeccd396f303805dca2bc03450b7eb116e2f5fc8c5a722d1fb9af233aa73c5c170839ce5ad8141b9b4643380982da4bfbb0b11284988f1b"}"#;
