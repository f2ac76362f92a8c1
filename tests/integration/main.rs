mod transport_tests;
