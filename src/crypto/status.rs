use std::fmt;

macro_rules! argon2_status {
    ($($variant:ident = $code:literal => $name:literal,)+) => {
        /// Result codes of the Argon2 reference implementation.
        ///
        /// `Ok` is the only success value. Discriminants equal the native
        /// return codes.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        pub enum Argon2Status {
            $($variant = $code,)+
        }

        impl Argon2Status {
            /// Maps a native return code onto its status.
            pub fn from_code(code: i32) -> Option<Self> {
                match code {
                    $($code => Some(Argon2Status::$variant),)+
                    _ => None,
                }
            }

            /// The reference library's constant name, without the `ARGON2_` prefix.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Argon2Status::$variant => $name,)+
                }
            }
        }
    };
}

argon2_status! {
    Ok = 0 => "OK",
    OutputPtrNull = -1 => "OUTPUT_PTR_NULL",
    OutputTooShort = -2 => "OUTPUT_TOO_SHORT",
    OutputTooLong = -3 => "OUTPUT_TOO_LONG",
    PwdTooShort = -4 => "PWD_TOO_SHORT",
    PwdTooLong = -5 => "PWD_TOO_LONG",
    SaltTooShort = -6 => "SALT_TOO_SHORT",
    SaltTooLong = -7 => "SALT_TOO_LONG",
    AdTooShort = -8 => "AD_TOO_SHORT",
    AdTooLong = -9 => "AD_TOO_LONG",
    SecretTooShort = -10 => "SECRET_TOO_SHORT",
    SecretTooLong = -11 => "SECRET_TOO_LONG",
    TimeTooSmall = -12 => "TIME_TOO_SMALL",
    TimeTooLarge = -13 => "TIME_TOO_LARGE",
    MemoryTooLittle = -14 => "MEMORY_TOO_LITTLE",
    MemoryTooMuch = -15 => "MEMORY_TOO_MUCH",
    LanesTooFew = -16 => "LANES_TOO_FEW",
    LanesTooMany = -17 => "LANES_TOO_MANY",
    PwdPtrMismatch = -18 => "PWD_PTR_MISMATCH",
    SaltPtrMismatch = -19 => "SALT_PTR_MISMATCH",
    SecretPtrMismatch = -20 => "SECRET_PTR_MISMATCH",
    AdPtrMismatch = -21 => "AD_PTR_MISMATCH",
    MemoryAllocationError = -22 => "MEMORY_ALLOCATION_ERROR",
    FreeMemoryCbkNull = -23 => "FREE_MEMORY_CBK_NULL",
    AllocateMemoryCbkNull = -24 => "ALLOCATE_MEMORY_CBK_NULL",
    IncorrectParameter = -25 => "INCORRECT_PARAMETER",
    IncorrectType = -26 => "INCORRECT_TYPE",
    OutPtrMismatch = -27 => "OUT_PTR_MISMATCH",
    ThreadsTooFew = -28 => "THREADS_TOO_FEW",
    ThreadsTooMany = -29 => "THREADS_TOO_MANY",
    MissingArgs = -30 => "MISSING_ARGS",
    EncodingFail = -31 => "ENCODING_FAIL",
    DecodingFail = -32 => "DECODING_FAIL",
    ThreadFail = -33 => "THREAD_FAIL",
    DecodingLengthFail = -34 => "DECODING_LENGTH_FAIL",
    VerifyMismatch = -35 => "VERIFY_MISMATCH",
}

impl Argon2Status {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn is_ok(self) -> bool {
        self == Argon2Status::Ok
    }
}

impl fmt::Display for Argon2Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_native_code_maps_back() {
        for code in -35..=0 {
            let status = Argon2Status::from_code(code).unwrap();
            assert_eq!(status.code(), code);
        }
    }

    #[test]
    fn codes_outside_taxonomy_are_rejected() {
        assert_eq!(Argon2Status::from_code(1), None);
        assert_eq!(Argon2Status::from_code(-36), None);
    }

    #[test]
    fn names_follow_reference_constants() {
        assert_eq!(Argon2Status::Ok.to_string(), "OK");
        assert_eq!(Argon2Status::from_code(-35).unwrap().as_str(), "VERIFY_MISMATCH");
        assert_eq!(Argon2Status::DecodingFail.code(), -32);
        assert!(!Argon2Status::VerifyMismatch.is_ok());
    }
}
