use folio_core_contact_impl::{
    commands::append::ContactAppendCommandServiceImpl, ContactFeatureServiceImpl,
};
use folio_shared_impl::time::TimeServiceImpl;
use folio_store_firebase::FirebaseStoreServiceImpl;
use folio_surface_console::ConsoleSurface;

// Shared
pub type Time = TimeServiceImpl;

// Store
pub type Store = FirebaseStoreServiceImpl;

// Surface
pub type Surface = ConsoleSurface;

// Contact
pub type ContactAppend = ContactAppendCommandServiceImpl<Time, Store>;
pub type Contact = ContactFeatureServiceImpl<Store, Surface, ContactAppend>;
