mod helpers;
mod test_otp;
