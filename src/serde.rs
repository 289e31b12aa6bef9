// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`DynamicArray`](crate::DynamicArray).
//!
//! - **Serialize**: as a sequence of the `len` live elements.
//! - **Deserialize**: from any sequence. Elements are appended through the
//!   normal growth path, so the capacity follows the doubling law; an
//!   allocation failure becomes a deserializer error instead of an abort.

// Crate imports
use crate::vec::DynamicArray;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

impl<T: Serialize> Serialize for DynamicArray<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct ArrayVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for ArrayVisitor<T> {
    type Value = DynamicArray<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = DynamicArray::try_new().map_err(<A::Error as de::Error>::custom)?;
        // The hint is untrusted input: cap what gets reserved up front.
        let hint = a.size_hint().unwrap_or(0).min(4096);
        out.try_reserve(hint).map_err(<A::Error as de::Error>::custom)?;
        while let Some(elem) = a.next_element::<T>()? {
            out.try_push_back(elem).map_err(<A::Error as de::Error>::custom)?;
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for DynamicArray<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(ArrayVisitor(PhantomData))
    }
}
