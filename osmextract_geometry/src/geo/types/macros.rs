/// `From<Vec<T>>` and `From<&[T; N]>` for the newtype geometries that wrap a `Vec` of parts.
macro_rules! impl_from_parts {
	($($outer:ty => $part:ty),* $(,)?) => {$(
		impl<T> From<Vec<T>> for $outer
		where
			$part: From<T>,
		{
			fn from(parts: Vec<T>) -> Self {
				Self(parts.into_iter().map(<$part>::from).collect())
			}
		}

		impl<'a, T, const N: usize> From<&'a [T; N]> for $outer
		where
			$part: From<&'a T>,
		{
			fn from(parts: &'a [T; N]) -> Self {
				Self(parts.iter().map(|part| <$part>::from(part)).collect())
			}
		}
	)*};
}

pub(crate) use impl_from_parts;
