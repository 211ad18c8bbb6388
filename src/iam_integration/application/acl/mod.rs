pub mod directory_identity_context_facade_impl;
